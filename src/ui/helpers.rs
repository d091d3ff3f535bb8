// src/ui/helpers.rs
use crate::model::AnswerLetter;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(
    ui: &mut Ui,
    label: impl Into<String>,
    width: f32,
    height: f32,
    enabled: bool,
) -> bool {
    let button = Button::new(label.into()).min_size(Vec2::new(width, height));
    ui.add_enabled(enabled, button).clicked()
}

/// Las cinco opciones como radios. Devuelve la letra pulsada en este frame, si la hay.
pub fn option_radios(
    ui: &mut Ui,
    options: &[(AnswerLetter, String)],
    chosen: Option<AnswerLetter>,
    enabled: bool,
) -> Option<AnswerLetter> {
    let mut picked = None;
    ui.add_enabled_ui(enabled, |ui| {
        for (letter, text) in options {
            let selected = chosen == Some(*letter);
            if ui.radio(selected, format!("{letter}. {text}")).clicked() {
                picked = Some(*letter);
            }
        }
    });
    picked
}

pub fn feedback_label(ui: &mut Ui, text: &str, correct: bool) {
    let color = if correct { Color32::GREEN } else { Color32::LIGHT_RED };
    ui.label(RichText::new(text).color(color).strong());
}
