use super::*;

impl QuizApp {
    fn with_editor<T>(
        &mut self,
        f: impl FnOnce(&mut AdminEditor) -> crate::error::Result<T>,
    ) -> Option<T> {
        let editor = self.editor.as_mut()?;
        match f(editor) {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    pub fn admin_select_topic(&mut self, topic_id: i64) {
        self.with_editor(|ed| ed.select_topic(topic_id));
    }

    pub fn admin_select_question(&mut self, id: i64) {
        self.with_editor(|ed| ed.select_question(id));
    }

    pub fn admin_new_question(&mut self) {
        self.with_editor(|ed| ed.new_question_form());
    }

    /// Guardar: los fallos de validación llegan juntos, una línea por campo
    pub fn admin_save(&mut self) {
        if let Some(outcome) = self.with_editor(|ed| ed.save()) {
            self.push_notice(Notice::info("Success", outcome.message()));
        }
    }

    pub fn admin_request_delete(&mut self) {
        self.with_editor(|ed| ed.request_delete());
    }

    pub fn admin_cancel_delete(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.cancel_delete();
        }
    }

    pub fn admin_confirm_delete(&mut self) {
        if let Some(id) = self.with_editor(|ed| ed.confirm_delete()) {
            self.push_notice(Notice::info("Success", format!("Question ID {id} deleted.")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app;
    use crate::editor::{FormMode, QuestionForm};
    use crate::test_support::{insert_unreadable_question, sample_fields, topic_id};

    fn admin_app() -> QuizApp {
        let mut app = app();
        app.gate.try_unlock("momothecat");
        app.show_admin_panel();
        let theater = topic_id(&app.store, "Theater");
        app.admin_select_topic(theater);
        app
    }

    fn editor(app: &QuizApp) -> &AdminEditor {
        app.editor.as_ref().unwrap()
    }

    #[test]
    fn save_without_selection_is_not_allowed() {
        let mut app = admin_app();
        app.admin_save();
        assert_eq!(app.current_notice().unwrap().title, "Not Allowed");
    }

    #[test]
    fn new_question_is_saved_and_listed() {
        let mut app = admin_app();
        app.admin_new_question();
        *app.editor.as_mut().unwrap().form_mut() = QuestionForm::from_fields(&sample_fields());
        app.admin_save();

        let notice = app.current_notice().unwrap();
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.text, "New question added.");
        assert_eq!(editor(&app).questions().len(), 1);
        assert_eq!(editor(&app).mode(), FormMode::Idle);
    }

    #[test]
    fn validation_errors_are_listed_together() {
        let mut app = admin_app();
        app.admin_new_question();
        app.admin_save();

        let notice = app.current_notice().unwrap();
        assert_eq!(notice.title, "Input Error");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.lines().count() >= 6);
        assert_eq!(editor(&app).mode(), FormMode::Creating);
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut app = admin_app();
        let theater = topic_id(&app.store, "Theater");
        let q = app.store.create_question(theater, &sample_fields()).unwrap();
        app.admin_select_topic(theater);
        app.admin_select_question(q.id);

        app.admin_request_delete();
        app.admin_cancel_delete();
        assert!(app.store.get_question(q.id).is_ok());

        app.admin_request_delete();
        app.admin_confirm_delete();
        assert!(app.store.get_question(q.id).is_err());
        assert_eq!(
            app.current_notice().unwrap().text,
            format!("Question ID {} deleted.", q.id)
        );
        assert!(editor(&app).questions().is_empty());
    }

    #[test]
    fn deleting_a_vanished_question_warns() {
        let mut app = admin_app();
        let theater = topic_id(&app.store, "Theater");
        let q = app.store.create_question(theater, &sample_fields()).unwrap();
        app.admin_select_topic(theater);
        app.admin_select_question(q.id);
        app.admin_request_delete();

        app.store.delete_question(q.id).unwrap();
        app.admin_confirm_delete();

        let notice = app.current_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Not Found");
    }

    #[test]
    fn list_reload_failure_after_save_is_shown() {
        let mut app = admin_app();
        let theater = topic_id(&app.store, "Theater");
        insert_unreadable_question(&app.store, theater);
        app.admin_new_question();
        *app.editor.as_mut().unwrap().form_mut() = QuestionForm::from_fields(&sample_fields());
        app.admin_save();

        let notice = app.current_notice().unwrap();
        assert_eq!(notice.title, "Database Error");
        assert_eq!(notice.level, NoticeLevel::Error);
    }
}
