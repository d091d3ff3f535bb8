use super::*;
use crate::session::{QuizResult, SessionState};
use crate::view_models::{BatchRow, ResultInfo, TopicInfo};
use log::warn;

impl QuizApp {
    /// Temas de la ventana del quiz con su número de preguntas
    pub fn topic_infos(&self) -> Vec<TopicInfo> {
        let Some(window) = self.quiz.as_ref() else {
            return Vec::new();
        };
        window
            .topics
            .iter()
            .enumerate()
            .map(|(idx, topic)| {
                let question_count = self.store.count_questions(topic.id).unwrap_or_else(|e| {
                    warn!("No se pudieron contar las preguntas de '{}': {e}", topic.name);
                    0
                });
                TopicInfo {
                    idx,
                    name: topic.name.clone(),
                    question_count,
                }
            })
            .collect()
    }

    pub fn batch_rows(&self) -> Vec<BatchRow> {
        let Some(SessionState::Batch(run)) = self.quiz_state() else {
            return Vec::new();
        };
        run.questions()
            .iter()
            .enumerate()
            .map(|(index, q)| BatchRow {
                index,
                question_text: q.fields.question_text.clone(),
                options: q
                    .fields
                    .options()
                    .iter()
                    .map(|(letter, text)| (*letter, (*text).to_owned()))
                    .collect(),
                chosen: run.answer(index),
            })
            .collect()
    }

    pub fn result_info(&self) -> Option<ResultInfo> {
        let window = self.quiz.as_ref()?;
        window.session.result().map(result_info)
    }
}

fn result_info(result: &QuizResult) -> ResultInfo {
    ResultInfo {
        topic_name: result.topic_name.clone(),
        score: result.score,
        total: result.total,
        percentage: result.percentage(),
        passed: result.passed(),
        summary: result.summary_line(),
    }
}
