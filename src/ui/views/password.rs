use crate::QuizApp;
use egui::{Align2, Context, Key, TextEdit};

pub fn ui_password_prompt(app: &mut QuizApp, ctx: &Context) {
    let Some(input) = app.password_prompt.as_mut() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;

    egui::Window::new("Admin Access")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Enter admin password:");
            let response = ui.add(TextEdit::singleline(input).password(true));
            if !response.has_focus() && input.is_empty() {
                response.request_focus();
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submit = true;
            }
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        app.submit_password();
    } else if cancel {
        app.cancel_password();
    }
}
