use crate::config::CONFIG_FILE;
use crate::error::QuizError;
use crate::ui::layout::centered_panel;
use eframe::{App, Frame};
use egui::{Color32, Context, RichText, ViewportCommand};

/// Ventana mínima para los errores de arranque (configuración o base de datos).
/// Al pulsar "Exit" (o cerrar) termina la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalErrorApp {
    pub title: String,
    pub message: String,
    pub hint: String,
}

impl FatalErrorApp {
    pub fn from_error(err: &QuizError) -> Self {
        let message = match err {
            QuizError::StorageUnavailable(msg) | QuizError::Config(msg) => msg.clone(),
            other => other.to_string(),
        };
        let hint = match err {
            QuizError::Config(_) => {
                format!("Fix {CONFIG_FILE} (or remove it to use the defaults) and start again.")
            }
            _ => "Run quiz_bowl_setup to create the database, then start the application again."
                .to_owned(),
        };
        Self {
            title: err.notice_title().to_owned(),
            message,
            hint,
        }
    }
}

impl App for FatalErrorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut exit = false;
        centered_panel(ctx, 200.0, 460.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(&self.title).color(Color32::LIGHT_RED));
                ui.add_space(12.0);
                ui.label(&self.message);
                ui.add_space(8.0);
                ui.label(&self.hint);
                ui.add_space(20.0);
                exit = ui.button("Exit").clicked();
            });
        });
        if exit {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}
