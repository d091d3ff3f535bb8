use crate::QuizApp;
use crate::session::SessionState;
use crate::ui::helpers::option_radios;
use crate::ui::layout::two_button_row;
use egui::{RichText, ScrollArea, Ui};

pub fn ui_batch(app: &mut QuizApp, ui: &mut Ui) -> bool {
    let rows = app.batch_rows();
    let answered = match app.quiz_state() {
        Some(SessionState::Batch(run)) => run.answered_count(),
        _ => return false,
    };

    ui.label(
        RichText::new(format!("Answered {answered} of {}", rows.len())).strong(),
    );
    ui.separator();

    let mut picks = Vec::new();
    ScrollArea::vertical()
        .auto_shrink([false; 2])
        .max_height((ui.available_height() - 60.0).max(120.0))
        .show(ui, |ui| {
            for row in &rows {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(row.heading()).strong());
                    ui.add_space(4.0);
                    if let Some(letter) = option_radios(ui, &row.options, row.chosen, true) {
                        picks.push((row.index, letter));
                    }
                });
                ui.add_space(6.0);
            }
        });

    ui.add_space(8.0);
    let panel_width = ui.available_width().min(420.0);
    let (submit, close) =
        two_button_row(ui, panel_width, ("Submit Quiz", true), ("Close Quiz", true));

    for (index, letter) in picks {
        app.set_batch_answer(index, letter);
    }
    if submit {
        app.submit_quiz();
    }
    close
}
