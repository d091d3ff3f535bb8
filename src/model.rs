use crate::error::{FormField, QuizError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub name: String,
}

/// Letra de opción (A..E). La comparación con la respuesta correcta siempre
/// pasa por aquí, así que minúsculas y espacios ya llegan normalizados.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
    E,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; 5] = [
        AnswerLetter::A,
        AnswerLetter::B,
        AnswerLetter::C,
        AnswerLetter::D,
        AnswerLetter::E,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerLetter::A => "A",
            AnswerLetter::B => "B",
            AnswerLetter::C => "C",
            AnswerLetter::D => "D",
            AnswerLetter::E => "E",
        }
    }

    pub fn option_field(self) -> FormField {
        match self {
            AnswerLetter::A => FormField::OptionA,
            AnswerLetter::B => FormField::OptionB,
            AnswerLetter::C => FormField::OptionC,
            AnswerLetter::D => FormField::OptionD,
            AnswerLetter::E => FormField::OptionE,
        }
    }
}

impl FromStr for AnswerLetter {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(AnswerLetter::A),
            "B" => Ok(AnswerLetter::B),
            "C" => Ok(AnswerLetter::C),
            "D" => Ok(AnswerLetter::D),
            "E" => Ok(AnswerLetter::E),
            _ => Err(QuizError::InvalidInput(format!(
                "'{s}' is not an answer letter (A-E)"
            ))),
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Campos editables de una pregunta (todo menos los IDs).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFields {
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub option_e: String,
    pub correct_answer: AnswerLetter,
}

impl QuestionFields {
    pub fn option(&self, letter: AnswerLetter) -> &str {
        match letter {
            AnswerLetter::A => &self.option_a,
            AnswerLetter::B => &self.option_b,
            AnswerLetter::C => &self.option_c,
            AnswerLetter::D => &self.option_d,
            AnswerLetter::E => &self.option_e,
        }
    }

    /// Las cinco opciones en orden fijo A..E
    pub fn options(&self) -> [(AnswerLetter, &str); 5] {
        AnswerLetter::ALL.map(|l| (l, self.option(l)))
    }

    pub fn correct_text(&self) -> &str {
        self.option(self.correct_answer)
    }

    /// Campos de texto obligatorios que están vacíos (solo espacios cuenta como vacío).
    pub fn empty_fields(&self) -> Vec<FormField> {
        let mut empty = Vec::new();
        if self.question_text.trim().is_empty() {
            empty.push(FormField::QuestionText);
        }
        for (letter, text) in self.options() {
            if text.trim().is_empty() {
                empty.push(letter.option_field());
            }
        }
        empty
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub topic_id: i64,
    pub fields: QuestionFields,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum QuizMode {
    #[default]
    Sequential,
    Batch,
}

impl QuizMode {
    pub fn label(self) -> &'static str {
        match self {
            QuizMode::Sequential => "One Question at a Time",
            QuizMode::Batch => "All Questions at Once",
        }
    }
}

/// Pantalla principal del shell. El quiz vive en su propia ventana.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Start,
    Admin,
}
