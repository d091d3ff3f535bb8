// Utilidades compartidas por los tests de los módulos

use crate::config::AppConfig;
use crate::model::{AnswerLetter, QuestionFields};
use crate::store::QuestionStore;

pub(crate) fn sample_fields() -> QuestionFields {
    QuestionFields {
        question_text: "Which keyword is used to define a function in Python?".into(),
        option_a: "fun".into(),
        option_b: "define".into(),
        option_c: "function".into(),
        option_d: "def".into(),
        option_e: "proc".into(),
        correct_answer: AnswerLetter::D,
    }
}

pub(crate) fn fields_answering(text: &str, correct: AnswerLetter) -> QuestionFields {
    QuestionFields {
        question_text: text.into(),
        correct_answer: correct,
        ..sample_fields()
    }
}

/// Base en memoria con los seis temas de la configuración por defecto
pub(crate) fn store_with_topics() -> QuestionStore {
    let store = QuestionStore::open_in_memory().unwrap();
    store.bootstrap(&AppConfig::default().initial_topics).unwrap();
    store
}

pub(crate) fn topic_id(store: &QuestionStore, name: &str) -> i64 {
    store.find_topic_by_name(name).unwrap().unwrap().id
}

/// Mete en el tema una fila cuya opción E es un BLOB: el CHECK la acepta,
/// pero cualquier lectura de la lista de preguntas falla al convertirla.
pub(crate) fn insert_unreadable_question(store: &QuestionStore, topic_id: i64) {
    store
        .execute_raw(&format!(
            "INSERT INTO Questions (topic_id, question_text, option_a, option_b, option_c, \
             option_d, option_e, correct_answer) \
             VALUES ({topic_id}, 'broken', 'a', 'b', 'c', 'd', X'00', 'A')"
        ))
        .unwrap();
}
