//! Crea la base de datos y los temas iniciales. Con `--seed` además carga
//! el banco de preguntas de ejemplo (sustituye todas las preguntas existentes).

use quiz_bowl::config::AppConfig;
use quiz_bowl::data::read_seed_questions;
use quiz_bowl::store::QuestionStore;
use std::{env, process};

fn run(seed: bool) -> quiz_bowl::error::Result<()> {
    let config = AppConfig::load()?;
    let path = &config.database_file;

    let store = QuestionStore::create(path)?;
    let added = store.bootstrap(&config.initial_topics)?;
    println!(
        "Database '{}' ready: {added} new topic(s), {} configured.",
        path.display(),
        config.initial_topics.len()
    );

    if seed {
        let questions = read_seed_questions();
        let report = store.replace_questions(&questions)?;
        println!(
            "Questions table reset: {} added, {} skipped.",
            report.added, report.skipped
        );
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let mut seed = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--seed" => seed = true,
            "-h" | "--help" => {
                println!("Usage: quiz_bowl_setup [--seed]");
                return;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                process::exit(2);
            }
        }
    }

    if let Err(e) = run(seed) {
        eprintln!("Setup failed: {e}");
        process::exit(1);
    }
}
