use crate::QuizApp;
use crate::model::QuizMode;
use crate::session::SessionState;
use crate::ui::helpers::big_list_button;
use crate::ui::views::{batch, results, sequential};
use egui::{Context, Id, LayerId, Order, ScrollArea, Ui};

enum Screen {
    Topics,
    Sequential,
    Batch,
    Results,
}

/// Ventana flotante del quiz; al cerrarla se descarta el intento en curso.
pub fn ui_quiz_window(app: &mut QuizApp, ctx: &Context) {
    let window_id = Id::new("quiz_window");
    let Some(window) = app.quiz.as_mut() else {
        return;
    };

    if window.bring_to_front {
        window.bring_to_front = false;
        ctx.move_to_top(LayerId::new(Order::Middle, window_id));
    }

    let (screen, title) = match window.session.state() {
        SessionState::TopicSelection => (Screen::Topics, "Take Quiz".to_owned()),
        SessionState::Sequential(run) => {
            (Screen::Sequential, format!("Quiz: {}", run.topic().name))
        }
        SessionState::Batch(run) => (Screen::Batch, format!("Quiz: {}", run.topic().name)),
        SessionState::Finished(_) => (Screen::Results, "Quiz Results".to_owned()),
    };

    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new(title)
        .id(window_id)
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([600.0, 520.0])
        .show(ctx, |ui| {
            close_clicked = match screen {
                Screen::Topics => ui_topic_selection(app, ui),
                Screen::Sequential => sequential::ui_sequential(app, ui),
                Screen::Batch => batch::ui_batch(app, ui),
                Screen::Results => results::ui_results(app, ui),
            };
        });

    if !open || close_clicked {
        app.close_quiz();
    }
}

/// Devuelve true si se pulsó "Close Quiz"
fn ui_topic_selection(app: &mut QuizApp, ui: &mut Ui) -> bool {
    let infos = app.topic_infos();
    let Some(window) = app.quiz.as_mut() else {
        return false;
    };

    ui.heading("Select Topic");
    ui.add_space(8.0);
    ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
        for info in &infos {
            ui.radio_value(&mut window.selected_topic, Some(info.idx), info.label());
        }
    });

    ui.add_space(10.0);
    ui.label("Quiz mode:");
    ui.horizontal(|ui| {
        for mode in [QuizMode::Sequential, QuizMode::Batch] {
            ui.radio_value(&mut window.mode, mode, mode.label());
        }
    });

    ui.add_space(16.0);
    let mut start = false;
    let mut close = false;
    ui.vertical_centered(|ui| {
        let btn_w = (ui.available_width() * 0.6).clamp(140.0, 280.0);
        start = big_list_button(ui, "▶ Start Quiz", btn_w, 36.0, window.selected_topic.is_some());
        ui.add_space(6.0);
        close = big_list_button(ui, "Close Quiz", btn_w, 30.0, true);
    });

    if start {
        app.start_selected_quiz();
    }
    close
}
