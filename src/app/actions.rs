use super::*;
use crate::session::SessionState;

impl QuizApp {
    /// Botón "Start Quiz" de la selección de tema
    pub fn start_selected_quiz(&mut self) {
        let Some(window) = self.quiz.as_mut() else {
            return;
        };
        let Some(topic) = window.selected_topic.and_then(|i| window.topics.get(i)) else {
            self.push_notice(Notice::warning("No Selection", "Please select a topic."));
            return;
        };
        let topic_id = topic.id;
        let mode = window.mode;
        window.choice = None;

        match window.session.start_quiz(topic_id, mode) {
            Ok(()) => self.prefs.preferred_mode = mode,
            Err(e) => self.report(e),
        }
    }

    pub fn choose_letter(&mut self, letter: AnswerLetter) {
        if let Some(window) = self.quiz.as_mut() {
            window.choice = Some(letter);
        }
    }

    /// "Check Answer": corrige la pregunta actual con la letra elegida
    pub fn check_answer(&mut self) {
        let Some(window) = self.quiz.as_mut() else {
            return;
        };
        let Some(letter) = window.choice else {
            self.push_notice(Notice::warning("No Answer", "Please select an answer."));
            return;
        };
        if let Err(e) = window.session.submit_answer(letter.as_str()) {
            self.report(e);
        }
    }

    /// "Next Question" / "Show Results"
    pub fn next_question(&mut self) {
        let Some(window) = self.quiz.as_mut() else {
            return;
        };
        match window.session.advance() {
            Ok(_) => window.choice = None,
            Err(e) => self.report(e),
        }
    }

    pub fn set_batch_answer(&mut self, index: usize, letter: AnswerLetter) {
        let Some(window) = self.quiz.as_mut() else {
            return;
        };
        if let Err(e) = window.session.set_answer(index, letter.as_str()) {
            self.report(e);
        }
    }

    /// "Submit Quiz": si quedan preguntas sin contestar se avisa, pero se corrige igual
    pub fn submit_quiz(&mut self) {
        let Some(window) = self.quiz.as_mut() else {
            return;
        };
        match window.session.submit_all() {
            Ok(outcome) if !outcome.is_complete() => self.push_notice(Notice::warning(
                "Incomplete",
                "Unanswered questions count as incorrect.",
            )),
            Ok(_) => {}
            Err(e) => self.report(e),
        }
    }

    /// Desde los resultados: vuelve a la selección de tema con un intento nuevo
    pub fn take_another_quiz(&mut self) {
        let Some(window) = self.quiz.as_mut() else {
            return;
        };
        window.session.discard();
        window.choice = None;
        window.topics = self.store.list_topics();
        if window.selected_topic.is_some_and(|i| i >= window.topics.len()) {
            window.selected_topic = None;
        }
    }

    pub fn quiz_state(&self) -> Option<&SessionState> {
        self.quiz.as_ref().map(|w| w.session.state())
    }
}
