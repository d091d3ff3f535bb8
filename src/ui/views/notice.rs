use crate::QuizApp;
use crate::app::NoticeLevel;
use egui::{Align2, Color32, Context, RichText};

pub fn ui_notice(app: &mut QuizApp, ctx: &Context) {
    let Some(notice) = app.current_notice().cloned() else {
        return;
    };

    let color = match notice.level {
        NoticeLevel::Info => ctx.style().visuals.text_color(),
        NoticeLevel::Warning => Color32::YELLOW,
        NoticeLevel::Error => Color32::LIGHT_RED,
    };

    let mut dismissed = false;
    egui::Window::new(format!("{} {}", notice.icon(), notice.title))
        .id(egui::Id::new("notice_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            for line in notice.text.lines() {
                ui.label(RichText::new(line).color(color));
            }
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        app.dismiss_notice();
    }
}
