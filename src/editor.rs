// src/editor.rs

use crate::error::{FormField, QuizError, Result, Violation};
use crate::model::{AnswerLetter, Question, QuestionFields, Topic};
use crate::store::QuestionStore;
use log::{info, warn};
use std::rc::Rc;

/// Buffer del formulario tal como lo escribe el usuario (sin validar).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionForm {
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub option_e: String,
    pub correct_answer: String,
}

impl QuestionForm {
    pub fn from_fields(fields: &QuestionFields) -> Self {
        Self {
            question_text: fields.question_text.clone(),
            option_a: fields.option_a.clone(),
            option_b: fields.option_b.clone(),
            option_c: fields.option_c.clone(),
            option_d: fields.option_d.clone(),
            option_e: fields.option_e.clone(),
            correct_answer: fields.correct_answer.as_str().to_owned(),
        }
    }

    pub fn option_mut(&mut self, letter: AnswerLetter) -> &mut String {
        match letter {
            AnswerLetter::A => &mut self.option_a,
            AnswerLetter::B => &mut self.option_b,
            AnswerLetter::C => &mut self.option_c,
            AnswerLetter::D => &mut self.option_d,
            AnswerLetter::E => &mut self.option_e,
        }
    }
}

/// Comprueba el formulario completo y devuelve todas las violaciones a la vez.
pub fn validate(form: &QuestionForm) -> Result<QuestionFields> {
    let texts = [
        (FormField::QuestionText, &form.question_text),
        (FormField::OptionA, &form.option_a),
        (FormField::OptionB, &form.option_b),
        (FormField::OptionC, &form.option_c),
        (FormField::OptionD, &form.option_d),
        (FormField::OptionE, &form.option_e),
    ];
    let mut violations: Vec<Violation> = texts
        .iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(field, _)| Violation::Empty(*field))
        .collect();

    let correct = form.correct_answer.parse::<AnswerLetter>();
    if correct.is_err() {
        violations.push(Violation::InvalidCorrectAnswer(form.correct_answer.clone()));
    }

    match correct {
        Ok(correct_answer) if violations.is_empty() => Ok(QuestionFields {
            question_text: form.question_text.trim().to_owned(),
            option_a: form.option_a.trim().to_owned(),
            option_b: form.option_b.trim().to_owned(),
            option_c: form.option_c.trim().to_owned(),
            option_d: form.option_d.trim().to_owned(),
            option_e: form.option_e.trim().to_owned(),
            correct_answer,
        }),
        _ => Err(QuizError::Validation(violations)),
    }
}

/// Qué hace ahora mismo el formulario (sustituye al enable/disable de botones)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(i64),
    Creating,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(Question),
    Updated(Question),
}

impl SaveOutcome {
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Created(_) => "New question added.".to_owned(),
            SaveOutcome::Updated(q) => format!("Question ID {} updated.", q.id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionListRow {
    pub id: i64,
    pub label: String,
}

const LIST_LABEL_CHARS: usize = 60;

impl QuestionListRow {
    fn from_question(q: &Question) -> Self {
        let text = &q.fields.question_text;
        let label = if text.chars().count() > LIST_LABEL_CHARS {
            let cut: String = text.chars().take(LIST_LABEL_CHARS).collect();
            format!("{}: {cut}...", q.id)
        } else {
            format!("{}: {text}", q.id)
        };
        Self { id: q.id, label }
    }
}

/// Panel de administración: CRUD de preguntas bajo el tema seleccionado.
pub struct AdminEditor {
    store: Rc<QuestionStore>,
    topics: Vec<Topic>,
    selected_topic: Option<Topic>,
    questions: Vec<Question>,
    form: QuestionForm,
    mode: FormMode,
    pending_delete: Option<i64>,
}

impl AdminEditor {
    pub fn new(store: Rc<QuestionStore>) -> Self {
        let topics = store.list_topics();
        Self {
            store,
            topics,
            selected_topic: None,
            questions: Vec::new(),
            form: QuestionForm::default(),
            mode: FormMode::Idle,
            pending_delete: None,
        }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected_topic.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_rows(&self) -> Vec<QuestionListRow> {
        self.questions.iter().map(QuestionListRow::from_question).collect()
    }

    pub fn form(&self) -> &QuestionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QuestionForm {
        &mut self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn can_save(&self) -> bool {
        !matches!(self.mode, FormMode::Idle)
    }

    pub fn can_delete(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Cambia de tema: recarga la lista de preguntas y limpia el formulario.
    pub fn select_topic(&mut self, topic_id: i64) -> Result<()> {
        let topic = self.store.get_topic(topic_id)?;
        let questions = self.store.list_questions(topic_id)?;
        self.selected_topic = Some(topic);
        self.questions = questions;
        self.clear_form();
        Ok(())
    }

    pub fn select_question(&mut self, id: i64) -> Result<()> {
        let question = self.store.get_question(id)?;
        self.form = QuestionForm::from_fields(&question.fields);
        self.mode = FormMode::Editing(question.id);
        self.pending_delete = None;
        Ok(())
    }

    pub fn new_question_form(&mut self) -> Result<()> {
        if self.selected_topic.is_none() {
            return Err(QuizError::InvalidState(
                "select a topic before adding a question",
            ));
        }
        self.form = QuestionForm::default();
        self.mode = FormMode::Creating;
        self.pending_delete = None;
        Ok(())
    }

    pub fn clear_form(&mut self) {
        self.form = QuestionForm::default();
        self.mode = FormMode::Idle;
        self.pending_delete = None;
    }

    /// Guarda el formulario (alta o edición según el modo). Si el guardado falla,
    /// el formulario y la lista quedan como estaban. Si lo que falla es la recarga
    /// posterior, el cambio ya está en la base y se devuelve el error de lectura.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let outcome = match self.mode {
            FormMode::Idle => {
                return Err(QuizError::InvalidState(
                    "select a question or press Add New first",
                ));
            }
            FormMode::Creating => {
                let fields = validate(&self.form)?;
                let topic_id = self
                    .selected_topic
                    .as_ref()
                    .map(|t| t.id)
                    .ok_or(QuizError::InvalidState("no topic selected for new question"))?;
                SaveOutcome::Created(self.store.create_question(topic_id, &fields)?)
            }
            FormMode::Editing(id) => {
                let fields = validate(&self.form)?;
                SaveOutcome::Updated(self.store.update_question(id, &fields)?)
            }
        };

        self.clear_form();
        self.reload_questions()?;
        Ok(outcome)
    }

    /// Primer paso del borrado: queda pendiente de confirmación.
    pub fn request_delete(&mut self) -> Result<i64> {
        let FormMode::Editing(id) = self.mode else {
            return Err(QuizError::InvalidState("no question selected to delete"));
        };
        self.pending_delete = Some(id);
        Ok(id)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Result<i64> {
        let Some(id) = self.pending_delete.take() else {
            return Err(QuizError::InvalidState("nothing to delete"));
        };
        // Si ya no existe se avisa y el resto del estado no se toca
        self.store.delete_question(id)?;
        info!("Pregunta {id} eliminada desde el panel");
        self.clear_form();
        self.reload_questions()?;
        Ok(id)
    }

    fn reload_questions(&mut self) -> Result<()> {
        let Some(topic) = &self.selected_topic else {
            self.questions.clear();
            return Ok(());
        };
        self.questions = self.store.list_questions(topic.id).map_err(|e| {
            warn!("No se pudo recargar la lista de preguntas: {e}");
            e
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        insert_unreadable_question, sample_fields, store_with_topics, topic_id,
    };

    fn filled_form() -> QuestionForm {
        QuestionForm::from_fields(&sample_fields())
    }

    fn editor_on_theater() -> (AdminEditor, i64) {
        let store = store_with_topics();
        let theater = topic_id(&store, "Theater");
        let mut editor = AdminEditor::new(Rc::new(store));
        editor.select_topic(theater).unwrap();
        (editor, theater)
    }

    #[test]
    fn validate_reports_every_violation_at_once() {
        let mut form = filled_form();
        form.option_c.clear();
        form.correct_answer = "F".into();

        let err = validate(&form).unwrap_err();
        assert_eq!(
            err.violations(),
            &[
                Violation::Empty(FormField::OptionC),
                Violation::InvalidCorrectAnswer("F".into())
            ]
        );
    }

    #[test]
    fn validate_accepts_lowercase_letter() {
        let mut form = filled_form();
        form.correct_answer = " d".into();
        assert_eq!(validate(&form).unwrap(), sample_fields());
    }

    #[test]
    fn new_form_requires_a_topic() {
        let store = store_with_topics();
        let mut editor = AdminEditor::new(Rc::new(store));
        assert_eq!(editor.topics().len(), 6);
        assert!(matches!(
            editor.new_question_form(),
            Err(QuizError::InvalidState(_))
        ));
    }

    #[test]
    fn create_reloads_list_and_clears_form() {
        let (mut editor, theater) = editor_on_theater();
        editor.new_question_form().unwrap();
        assert!(editor.can_save());
        assert!(!editor.can_delete());

        *editor.form_mut() = filled_form();
        let outcome = editor.save().unwrap();
        let SaveOutcome::Created(q) = &outcome else {
            panic!("expected a new question");
        };
        assert_eq!(q.topic_id, theater);
        assert_eq!(outcome.message(), "New question added.");
        assert_eq!(editor.questions().len(), 1);
        assert_eq!(editor.mode(), FormMode::Idle);
        assert_eq!(editor.form(), &QuestionForm::default());
    }

    #[test]
    fn select_then_update_round_trips() {
        let (mut editor, theater) = editor_on_theater();
        let created = editor.store.create_question(theater, &sample_fields()).unwrap();
        editor.select_topic(theater).unwrap();

        editor.select_question(created.id).unwrap();
        assert_eq!(editor.mode(), FormMode::Editing(created.id));
        assert_eq!(editor.form(), &filled_form());

        editor.form_mut().question_text = "What does def do?".into();
        let outcome = editor.save().unwrap();
        assert_eq!(outcome.message(), format!("Question ID {} updated.", created.id));
        assert_eq!(
            editor.store.get_question(created.id).unwrap().fields.question_text,
            "What does def do?"
        );
        assert_eq!(editor.questions()[0].fields.question_text, "What does def do?");
    }

    #[test]
    fn failed_save_keeps_form_and_list() {
        let (mut editor, _) = editor_on_theater();
        editor.new_question_form().unwrap();
        let mut form = filled_form();
        form.option_a.clear();
        *editor.form_mut() = form.clone();

        assert!(matches!(editor.save(), Err(QuizError::Validation(_))));
        assert_eq!(editor.form(), &form);
        assert_eq!(editor.mode(), FormMode::Creating);
        assert!(editor.questions().is_empty());
    }

    #[test]
    fn reload_failure_after_save_is_returned() {
        let (mut editor, theater) = editor_on_theater();
        insert_unreadable_question(&editor.store, theater);
        editor.new_question_form().unwrap();
        *editor.form_mut() = filled_form();

        assert!(matches!(editor.save(), Err(QuizError::Storage(_))));
        // la pregunta sí quedó guardada y el formulario ya no está en alta
        assert_eq!(editor.store.count_questions(theater).unwrap(), 2);
        assert_eq!(editor.mode(), FormMode::Idle);
    }

    #[test]
    fn reload_failure_after_delete_is_returned() {
        let (mut editor, theater) = editor_on_theater();
        let created = editor.store.create_question(theater, &sample_fields()).unwrap();
        editor.select_topic(theater).unwrap();
        editor.select_question(created.id).unwrap();
        editor.request_delete().unwrap();
        insert_unreadable_question(&editor.store, theater);

        assert!(matches!(editor.confirm_delete(), Err(QuizError::Storage(_))));
        assert!(matches!(
            editor.store.get_question(created.id),
            Err(QuizError::NotFound { .. })
        ));
        assert_eq!(editor.pending_delete(), None);
    }

    #[test]
    fn delete_needs_confirmation() {
        let (mut editor, theater) = editor_on_theater();
        let created = editor.store.create_question(theater, &sample_fields()).unwrap();
        editor.select_topic(theater).unwrap();
        editor.select_question(created.id).unwrap();

        assert_eq!(editor.request_delete().unwrap(), created.id);
        editor.cancel_delete();
        assert!(matches!(editor.confirm_delete(), Err(QuizError::InvalidState(_))));
        assert_eq!(editor.questions().len(), 1);

        editor.request_delete().unwrap();
        assert_eq!(editor.confirm_delete().unwrap(), created.id);
        assert!(editor.questions().is_empty());
        assert_eq!(editor.mode(), FormMode::Idle);
        assert!(matches!(
            editor.store.get_question(created.id),
            Err(QuizError::NotFound { .. })
        ));
    }

    #[test]
    fn deleting_a_vanished_question_only_warns() {
        let (mut editor, theater) = editor_on_theater();
        let created = editor.store.create_question(theater, &sample_fields()).unwrap();
        editor.select_topic(theater).unwrap();
        editor.select_question(created.id).unwrap();
        editor.request_delete().unwrap();

        // otra ventana la borra antes de confirmar
        editor.store.delete_question(created.id).unwrap();
        assert!(matches!(
            editor.confirm_delete(),
            Err(QuizError::NotFound { .. })
        ));
        assert_eq!(editor.mode(), FormMode::Editing(created.id));
        assert_eq!(editor.questions().len(), 1);
    }

    #[test]
    fn switching_topic_clears_the_form() {
        let (mut editor, _) = editor_on_theater();
        editor.new_question_form().unwrap();
        editor.form_mut().question_text = "half typed".into();

        let finance = editor
            .topics()
            .iter()
            .find(|t| t.name == "Intermediate Finance")
            .unwrap()
            .id;
        editor.select_topic(finance).unwrap();
        assert_eq!(editor.mode(), FormMode::Idle);
        assert_eq!(editor.form(), &QuestionForm::default());
        assert_eq!(editor.selected_topic().unwrap().name, "Intermediate Finance");
    }

    #[test]
    fn long_questions_are_truncated_in_the_list() {
        let (mut editor, theater) = editor_on_theater();
        let mut fields = sample_fields();
        fields.question_text = "x".repeat(80);
        let q = editor.store.create_question(theater, &fields).unwrap();
        editor.select_topic(theater).unwrap();

        let rows = editor.question_rows();
        assert_eq!(rows[0].label, format!("{}: {}...", q.id, "x".repeat(60)));
    }
}
