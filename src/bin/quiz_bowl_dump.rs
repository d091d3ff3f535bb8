//! Imprime el contenido de las tablas `Topics` y `Questions`.

use quiz_bowl::config::AppConfig;
use quiz_bowl::store::QuestionStore;
use std::process;

fn main() {
    pretty_env_logger::init();

    let result = AppConfig::load()
        .and_then(|config| QuestionStore::open(&config.database_file))
        .and_then(|store| store.dump());

    let tables = match result {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    for table in tables {
        println!("--- Data from table: {} ---", table.name);
        if table.rows.is_empty() {
            println!("(No data found in {})", table.name);
        } else {
            println!("{}", table.columns.join(" | "));
            for row in &table.rows {
                println!("{}", row.join(" | "));
            }
        }
        println!();
    }
}
