use eframe::egui;
use log::{error, info};
use quiz_bowl::QuizApp;
use quiz_bowl::app::UiPrefs;
use quiz_bowl::config::AppConfig;
use quiz_bowl::store::QuestionStore;
use quiz_bowl::ui::layout::apply_theme;
use quiz_bowl::ui::views::fatal::FatalErrorApp;

fn native_options(title: &str) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([700.0, 650.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    }
}

/// Errores de arranque: se muestran en una ventana propia y la aplicación termina
fn run_fatal(title: &str, fatal: FatalErrorApp) -> eframe::Result<()> {
    eframe::run_native(
        title,
        native_options(title),
        Box::new(|_cc| Ok(Box::new(fatal))),
    )
}

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return run_fatal(&AppConfig::default().window_title, FatalErrorApp::from_error(&e));
        }
    };
    let options = native_options(&config.window_title);
    let title = config.window_title.clone();

    let store = match QuestionStore::open(&config.database_file) {
        Ok(store) => store,
        Err(e) => {
            error!("{e}");
            return run_fatal(&title, FatalErrorApp::from_error(&e));
        }
    };

    info!("Arrancando {title}");
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            // Preferencias guardadas por eframe en la sesión anterior
            let prefs: UiPrefs = cc
                .storage
                .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
                .unwrap_or_default();
            apply_theme(&cc.egui_ctx, prefs.dark_mode);
            Ok(Box::new(QuizApp::new(store, config, prefs)))
        }),
    )
}
