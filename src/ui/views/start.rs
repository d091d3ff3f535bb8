use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    let mut open_admin = false;
    let mut take_quiz = false;

    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Welcome to the Quiz Bowl!").strong());
            ui.add_space(10.0);
            ui.label("Pick a topic and test what you know, or manage the question bank.");
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.8).clamp(160.0, 320.0);
            let btn_h = 40.0;
            open_admin = big_list_button(ui, "🔐 Access Admin Panel", btn_w, btn_h, true);
            ui.add_space(8.0);
            take_quiz = big_list_button(ui, "📝 Take Quiz", btn_w, btn_h, true);
        });
    });

    if open_admin {
        app.show_admin_panel();
    }
    if take_quiz {
        app.launch_quiz();
    }
}
