// src/data.rs

use crate::model::QuestionFields;
use serde::{Deserialize, Serialize};
use serde_yaml;

/// Pregunta del banco inicial; el tema va por nombre y se resuelve al sembrar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeedQuestion {
    pub topic: String,
    #[serde(flatten)]
    pub fields: QuestionFields,
}

#[derive(Deserialize)]
struct SeedFile {
    questions: Vec<SeedQuestion>,
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_seed_questions() -> Vec<SeedQuestion> {
    let file_content = include_str!("data/seed_questions.yaml");
    let file: SeedFile = serde_yaml::from_str(file_content)
        .expect("No se pudo parsear el banco de preguntas YAML");
    file.questions
}
