use super::*;
use log::{debug, info};

impl QuizApp {
    /// Botón "Access Admin Panel": pide la contraseña salvo que ya esté desbloqueado
    pub fn show_admin_panel(&mut self) {
        if self.gate.is_unlocked() {
            self.enter_admin();
        } else {
            self.password_prompt = Some(String::new());
        }
    }

    pub fn submit_password(&mut self) {
        let Some(input) = self.password_prompt.take() else {
            return;
        };
        if self.gate.try_unlock(&input) {
            info!("Panel de administración desbloqueado");
            self.enter_admin();
        } else {
            self.push_notice(Notice::error("Access Denied", "Incorrect password."));
        }
    }

    /// Cancelar el diálogo no es un error
    pub fn cancel_password(&mut self) {
        self.password_prompt = None;
    }

    fn enter_admin(&mut self) {
        // Cada entrada vuelve a leer de la base
        let mut editor = AdminEditor::new(Rc::clone(&self.store));
        if let Some(first) = editor.topics().first().map(|t| t.id) {
            if let Err(e) = editor.select_topic(first) {
                self.report(e);
            }
        }
        self.editor = Some(editor);
        self.state = AppState::Admin;
    }

    pub fn show_start_screen(&mut self) {
        self.editor = None;
        self.state = AppState::Start;
    }

    /// Abre la ventana del quiz, o la trae al frente si ya estaba abierta.
    pub fn launch_quiz(&mut self) {
        if let Some(window) = self.quiz.as_mut() {
            debug!("La ventana del quiz ya está abierta");
            window.bring_to_front = true;
            return;
        }

        let topics = self.store.list_topics();
        if topics.is_empty() {
            self.push_notice(Notice::error("Init Error", "No topics found!"));
            return;
        }
        let session = QuizSession::new(Rc::clone(&self.store), self.config.pass_threshold);
        self.quiz = Some(QuizWindow::new(session, topics, self.prefs.preferred_mode));
    }

    pub fn close_quiz(&mut self) {
        if let Some(window) = self.quiz.take() {
            self.prefs.preferred_mode = window.mode;
        }
    }
}
