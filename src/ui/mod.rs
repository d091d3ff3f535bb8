mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Pantalla principal según el estado
        match self.state {
            AppState::Start => views::start::ui_start(self, ctx),
            AppState::Admin => views::admin::ui_admin(self, ctx),
        }

        // Ventanas flotantes: el quiz puede convivir con el panel de admin
        if self.quiz.is_some() {
            views::quiz::ui_quiz_window(self, ctx);
        }
        if self.password_prompt.is_some() {
            views::password::ui_password_prompt(self, ctx);
        }
        if self.editor.as_ref().is_some_and(|ed| ed.pending_delete().is_some()) {
            views::admin::ui_confirm_delete(self, ctx);
        }

        // Los avisos van encima de todo
        if self.current_notice().is_some() {
            views::notice::ui_notice(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
