use crate::config::AppConfig;
use crate::editor::AdminEditor;
use crate::error::QuizError;
use crate::model::{AnswerLetter, AppState, QuizMode, Topic};
use crate::session::QuizSession;
use crate::store::QuestionStore;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::rc::Rc;

// Submódulos
pub mod actions;
pub mod admin;
pub mod navigation;
pub mod notices;
pub mod view_models;

pub use notices::{Notice, NoticeLevel};

/// Preferencias de interfaz que eframe guarda entre ejecuciones
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct UiPrefs {
    pub preferred_mode: QuizMode,
    pub dark_mode: bool,
}

/// Control de acceso al panel: una sola contraseña compartida, comparación exacta.
/// Una vez desbloqueado sigue así hasta cerrar la aplicación.
pub struct AdminGate {
    passphrase: String,
    unlocked: bool,
}

impl AdminGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            unlocked: false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn try_unlock(&mut self, input: &str) -> bool {
        if input == self.passphrase {
            self.unlocked = true;
        }
        self.unlocked
    }
}

/// Ventana del quiz (puede estar abierta a la vez que el panel de admin).
pub struct QuizWindow {
    pub session: QuizSession,
    pub topics: Vec<Topic>,
    pub selected_topic: Option<usize>,
    pub mode: QuizMode,
    // Selección del radio en modo secuencial, antes de "Check Answer"
    pub choice: Option<AnswerLetter>,
    pub bring_to_front: bool,
}

impl QuizWindow {
    pub fn new(session: QuizSession, topics: Vec<Topic>, mode: QuizMode) -> Self {
        let selected_topic = if topics.is_empty() { None } else { Some(0) };
        Self {
            session,
            topics,
            selected_topic,
            mode,
            choice: None,
            bring_to_front: false,
        }
    }
}

pub struct QuizApp {
    pub store: Rc<QuestionStore>,
    pub config: AppConfig,
    pub gate: AdminGate,
    pub state: AppState,
    pub prefs: UiPrefs,
    pub editor: Option<AdminEditor>,
    pub quiz: Option<QuizWindow>,
    pub notices: VecDeque<Notice>,
    // Some mientras se muestra el diálogo de contraseña
    pub password_prompt: Option<String>,
}

impl QuizApp {
    pub fn new(store: QuestionStore, config: AppConfig, prefs: UiPrefs) -> Self {
        let gate = AdminGate::new(config.admin_passphrase.clone());
        Self {
            store: Rc::new(store),
            config,
            gate,
            state: AppState::Start,
            prefs,
            editor: None,
            quiz: None,
            notices: VecDeque::new(),
            password_prompt: None,
        }
    }

    /// Convierte un error de una acción del usuario en un aviso en pantalla
    pub fn report(&mut self, err: QuizError) {
        self.push_notice(Notice::from_error(&err));
    }
}
