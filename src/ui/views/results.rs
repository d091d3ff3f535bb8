use crate::QuizApp;
use crate::ui::layout::two_button_row;
use egui::{Color32, RichText, Ui};

pub fn ui_results(app: &mut QuizApp, ui: &mut Ui) -> bool {
    let Some(info) = app.result_info() else {
        return false;
    };

    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading(info.heading());
        ui.add_space(10.0);
        ui.label(RichText::new(&info.summary).size(16.0));
        ui.add_space(6.0);
        let color = if info.passed { Color32::GREEN } else { Color32::LIGHT_RED };
        ui.label(RichText::new(info.status_line()).color(color).heading().strong());
        ui.add_space(20.0);
    });

    let panel_width = ui.available_width().min(420.0);
    let (again, close) = two_button_row(
        ui,
        panel_width,
        ("Take Another Quiz", true),
        ("Close Quiz", true),
    );
    if again {
        app.take_another_quiz();
    }
    close
}
