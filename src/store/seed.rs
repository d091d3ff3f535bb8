use super::{INSERT_QUESTION, QuestionStore};
use super::schema::CREATE_QUESTIONS_TABLE;
use crate::data::SeedQuestion;
use crate::error::Result;
use log::{info, warn};
use rusqlite::params;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub added: usize,
    pub skipped: usize,
}

impl QuestionStore {
    /// Sustituye la tabla de preguntas por el banco dado.
    ///
    /// Destructivo: borra y recrea `Questions`. Cada pregunta busca su tema por
    /// nombre exacto; las que no lo encuentran (o traen campos vacíos) se cuentan
    /// como saltadas. Todo va en una transacción.
    pub fn replace_questions(&self, seed: &[SeedQuestion]) -> Result<SeedReport> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch("DROP TABLE IF EXISTS Questions;")?;
        tx.execute_batch(CREATE_QUESTIONS_TABLE)?;

        let mut report = SeedReport::default();
        for q in seed {
            if !q.fields.empty_fields().is_empty() {
                warn!("Pregunta con campos vacíos saltada: {}", q.fields.question_text);
                report.skipped += 1;
                continue;
            }
            let Some(topic) = self.find_topic_by_name(&q.topic)? else {
                warn!("Tema '{}' no encontrado en la base de datos", q.topic);
                report.skipped += 1;
                continue;
            };
            let f = &q.fields;
            tx.execute(
                INSERT_QUESTION,
                params![
                    topic.id,
                    f.question_text,
                    f.option_a,
                    f.option_b,
                    f.option_c,
                    f.option_d,
                    f.option_e,
                    f.correct_answer.as_str(),
                ],
            )?;
            report.added += 1;
        }
        tx.commit()?;

        info!(
            "Banco sembrado: {} añadidas, {} saltadas",
            report.added, report.skipped
        );
        Ok(report)
    }
}
