use std::fmt;
use thiserror::Error;

/// Campo del formulario de pregunta, para reportar errores de validación.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    QuestionText,
    OptionA,
    OptionB,
    OptionC,
    OptionD,
    OptionE,
    CorrectAnswer,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::QuestionText => "Question",
            FormField::OptionA => "Option A",
            FormField::OptionB => "Option B",
            FormField::OptionC => "Option C",
            FormField::OptionD => "Option D",
            FormField::OptionE => "Option E",
            FormField::CorrectAnswer => "Correct Answer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    Empty(FormField),
    InvalidCorrectAnswer(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty(field) => write!(f, "{} must be filled.", field.label()),
            Violation::InvalidCorrectAnswer(v) if v.trim().is_empty() => {
                f.write_str("Correct Answer must be selected.")
            }
            Violation::InvalidCorrectAnswer(v) => {
                write!(f, "Correct Answer must be A-E (got '{v}').")
            }
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("{entity} ID {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{}", join_violations(.0))]
    Validation(Vec<Violation>),

    #[error("topic ID {topic_id} does not exist")]
    Referential { topic_id: i64 },

    #[error("database unavailable: {0}")]
    StorageUnavailable(String),

    #[error("operation not allowed now: {0}")]
    InvalidState(&'static str),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no questions found for the topic '{topic}'")]
    NoQuestions { topic: String },

    #[error("question ID {id} has an invalid correct answer '{value}'")]
    MalformedRow { id: i64, value: String },

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl QuizError {
    /// Título del diálogo con el que el shell muestra este error
    pub fn notice_title(&self) -> &'static str {
        match self {
            QuizError::NotFound { .. } => "Not Found",
            QuizError::Validation(_) | QuizError::InvalidInput(_) => "Input Error",
            QuizError::Referential { .. } => "Error",
            QuizError::StorageUnavailable(_)
            | QuizError::Storage(_)
            | QuizError::MalformedRow { .. } => "Database Error",
            QuizError::InvalidState(_) => "Not Allowed",
            QuizError::NoQuestions { .. } => "No Questions",
            QuizError::Config(_) => "Configuration Error",
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            QuizError::Validation(v) => v,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
