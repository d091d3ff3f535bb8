use crate::QuizApp;
use crate::editor::FormMode;
use crate::model::AnswerLetter;
use egui::{
    Align2, Button, CentralPanel, ComboBox, Context, RichText, ScrollArea, SidePanel, TextEdit,
};

enum AdminAction {
    SelectTopic(i64),
    SelectQuestion(i64),
    NewQuestion,
    Save,
    Delete,
    Clear,
}

pub fn ui_admin(app: &mut QuizApp, ctx: &Context) {
    let Some(editor) = app.editor.as_mut() else {
        return;
    };
    let mut action = None;

    // ----------- TEMAS Y LISTA DE PREGUNTAS -----------
    SidePanel::left("admin_list")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading("Questions");
            ui.add_space(6.0);

            let selected_name = editor
                .selected_topic()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Select a topic".to_owned());
            let selected_id = editor.selected_topic().map(|t| t.id);
            ComboBox::from_label("Topic")
                .selected_text(selected_name)
                .show_ui(ui, |ui| {
                    for topic in editor.topics() {
                        let is_selected = selected_id == Some(topic.id);
                        if ui.selectable_label(is_selected, topic.name.as_str()).clicked() {
                            action = Some(AdminAction::SelectTopic(topic.id));
                        }
                    }
                });
            ui.add_space(6.0);

            let editing = match editor.mode() {
                FormMode::Editing(id) => Some(id),
                _ => None,
            };
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .max_height((ui.available_height() - 48.0).max(60.0))
                .show(ui, |ui| {
                    let rows = editor.question_rows();
                    if rows.is_empty() && selected_id.is_some() {
                        ui.label("No questions in this topic yet.");
                    }
                    for row in rows {
                        if ui.selectable_label(editing == Some(row.id), row.label).clicked() {
                            action = Some(AdminAction::SelectQuestion(row.id));
                        }
                    }
                });

            ui.add_space(6.0);
            if ui
                .add_enabled(selected_id.is_some(), Button::new("➕ New Question"))
                .clicked()
            {
                action = Some(AdminAction::NewQuestion);
            }
        });

    // ----------- FORMULARIO -----------
    CentralPanel::default().show(ctx, |ui| {
        let mode = editor.mode();
        let heading = match mode {
            FormMode::Idle => "Select a question or add a new one".to_owned(),
            FormMode::Editing(id) => format!("Editing question ID {id}"),
            FormMode::Creating => "New question".to_owned(),
        };
        ui.heading(heading);
        ui.add_space(10.0);

        let can_save = editor.can_save();
        let can_delete = editor.can_delete();

        ui.add_enabled_ui(can_save, |ui| {
            let form = editor.form_mut();
            ui.label("Question:");
            ui.add(
                TextEdit::multiline(&mut form.question_text)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            egui::Grid::new("admin_options_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    for letter in AnswerLetter::ALL {
                        ui.label(format!("Option {letter}:"));
                        ui.add(
                            TextEdit::singleline(form.option_mut(letter))
                                .desired_width(f32::INFINITY),
                        );
                        ui.end_row();
                    }

                    ui.label("Correct Answer:");
                    let shown = if form.correct_answer.trim().is_empty() {
                        "-".to_owned()
                    } else {
                        form.correct_answer.clone()
                    };
                    ComboBox::from_id_salt("correct_answer")
                        .selected_text(shown)
                        .show_ui(ui, |ui| {
                            for letter in AnswerLetter::ALL {
                                ui.selectable_value(
                                    &mut form.correct_answer,
                                    letter.as_str().to_owned(),
                                    letter.as_str(),
                                );
                            }
                        });
                    ui.end_row();
                });
        });

        ui.add_space(14.0);
        ui.horizontal(|ui| {
            let save_label = match mode {
                FormMode::Creating => "💾 Save New Question",
                _ => "💾 Save Changes",
            };
            if ui.add_enabled(can_save, Button::new(save_label)).clicked() {
                action = Some(AdminAction::Save);
            }
            if ui
                .add_enabled(can_delete, Button::new(RichText::new("🗑 Delete Question")))
                .clicked()
            {
                action = Some(AdminAction::Delete);
            }
            if ui.add_enabled(can_save, Button::new("Clear")).clicked() {
                action = Some(AdminAction::Clear);
            }
        });
    });

    match action {
        Some(AdminAction::SelectTopic(id)) => app.admin_select_topic(id),
        Some(AdminAction::SelectQuestion(id)) => app.admin_select_question(id),
        Some(AdminAction::NewQuestion) => app.admin_new_question(),
        Some(AdminAction::Save) => app.admin_save(),
        Some(AdminAction::Delete) => app.admin_request_delete(),
        Some(AdminAction::Clear) => {
            if let Some(editor) = app.editor.as_mut() {
                editor.clear_form();
            }
        }
        None => {}
    }
}

/// Segundo paso del borrado
pub fn ui_confirm_delete(app: &mut QuizApp, ctx: &Context) {
    let Some(id) = app.editor.as_ref().and_then(|ed| ed.pending_delete()) else {
        return;
    };

    let mut confirm = false;
    let mut cancel = false;
    egui::Window::new("Confirm Delete")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Are you sure you want to delete Question ID {id}?"));
            ui.horizontal(|ui| {
                if ui.button("Yes, delete").clicked() {
                    confirm = true;
                }
                if ui.button("No").clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        app.admin_confirm_delete();
    } else if cancel {
        app.admin_cancel_delete();
    }
}
