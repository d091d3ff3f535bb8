// src/view_models.rs

use crate::model::AnswerLetter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicInfo {
    pub idx: usize, // índice en la lista de temas de la ventana
    pub name: String,
    pub question_count: usize,
}

impl TopicInfo {
    pub fn label(&self) -> String {
        match self.question_count {
            0 => format!("{} (empty)", self.name),
            1 => format!("{} (1 question)", self.name),
            n => format!("{} ({n} questions)", self.name),
        }
    }
}

/// Una fila del modo batch: enunciado, opciones y lo que lleva marcado
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchRow {
    pub index: usize,
    pub question_text: String,
    pub options: Vec<(AnswerLetter, String)>,
    pub chosen: Option<AnswerLetter>,
}

impl BatchRow {
    pub fn heading(&self) -> String {
        format!("Q{}: {}", self.index + 1, self.question_text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultInfo {
    pub topic_name: String,
    pub score: u32,
    pub total: usize,
    pub percentage: f64,
    pub passed: bool,
    pub summary: String,
}

impl ResultInfo {
    pub fn heading(&self) -> String {
        format!("Quiz Results: {}", self.topic_name)
    }

    pub fn status_line(&self) -> String {
        if self.passed {
            "Result: Pass ✅".to_owned()
        } else {
            "Result: Fail ❌".to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_label_shows_question_count() {
        let mut info = TopicInfo {
            idx: 0,
            name: "Theater".into(),
            question_count: 0,
        };
        assert_eq!(info.label(), "Theater (empty)");
        info.question_count = 1;
        assert_eq!(info.label(), "Theater (1 question)");
        info.question_count = 10;
        assert_eq!(info.label(), "Theater (10 questions)");
    }

    #[test]
    fn result_status_line() {
        let info = ResultInfo {
            topic_name: "Theater".into(),
            score: 2,
            total: 3,
            percentage: 200.0 / 3.0,
            passed: false,
            summary: String::new(),
        };
        assert_eq!(info.heading(), "Quiz Results: Theater");
        assert_eq!(info.status_line(), "Result: Fail ❌");
    }
}
