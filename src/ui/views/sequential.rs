use crate::QuizApp;
use crate::session::SessionState;
use crate::ui::helpers::{feedback_label, option_radios};
use crate::ui::layout::two_button_row;
use egui::{RichText, ScrollArea, Ui};

pub fn ui_sequential(app: &mut QuizApp, ui: &mut Ui) -> bool {
    let Some(window) = app.quiz.as_ref() else {
        return false;
    };
    let SessionState::Sequential(run) = window.session.state() else {
        return false;
    };

    // Copia de lo que se pinta, para poder llamar a las acciones después
    let question = run.current_question().clone();
    let feedback = run.feedback().cloned();
    let (number, total, score, is_last) = (run.number(), run.total(), run.score(), run.is_last());
    let choice = window.choice;

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Question {number} of {total}")).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("Score: {score} / {total}")).strong());
        });
    });
    ui.separator();

    ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
        ui.label(RichText::new(&question.fields.question_text).size(16.0));
    });
    ui.add_space(8.0);

    let options: Vec<_> = question
        .fields
        .options()
        .iter()
        .map(|(letter, text)| (*letter, (*text).to_owned()))
        .collect();
    let picked = option_radios(ui, &options, choice, feedback.is_none());

    ui.add_space(8.0);
    if let Some(fb) = &feedback {
        feedback_label(ui, &fb.message(), fb.is_correct);
        ui.add_space(6.0);
    }

    let panel_width = ui.available_width().min(420.0);
    let next_label = if is_last { "Show Results" } else { "Next Question" };
    let (check, next) = two_button_row(
        ui,
        panel_width,
        ("Check Answer", feedback.is_none() && choice.is_some()),
        (next_label, feedback.is_some()),
    );
    ui.add_space(6.0);
    let close = ui.button("Close Quiz").clicked();

    if let Some(letter) = picked {
        app.choose_letter(letter);
    }
    if check {
        app.check_answer();
    }
    if next {
        app.next_question();
    }
    close
}
