use super::QuestionStore;
use crate::error::Result;
use log::{debug, info};

pub(crate) const CREATE_TOPICS_TABLE: &str = "CREATE TABLE IF NOT EXISTS Topics (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);";

// ON DELETE CASCADE: borrar un tema borra sus preguntas
pub(crate) const CREATE_QUESTIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS Questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    topic_id INTEGER NOT NULL,
    question_text TEXT NOT NULL,
    option_a TEXT NOT NULL,
    option_b TEXT NOT NULL,
    option_c TEXT NOT NULL,
    option_d TEXT NOT NULL,
    option_e TEXT NOT NULL,
    correct_answer TEXT NOT NULL CHECK(correct_answer IN ('A', 'B', 'C', 'D', 'E')),
    FOREIGN KEY (topic_id) REFERENCES Topics (id) ON DELETE CASCADE
);";

impl QuestionStore {
    pub(crate) fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_TOPICS_TABLE)?;
        self.conn.execute_batch(CREATE_QUESTIONS_TABLE)?;
        Ok(())
    }

    pub(crate) fn has_schema(&self) -> Result<bool> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'table' AND name IN ('Topics', 'Questions')",
            [],
            |row| row.get(0),
        )?;
        Ok(n == 2)
    }

    /// Crea las tablas si faltan e inserta los temas que no existan todavía.
    /// Se puede repetir sin efectos; devuelve cuántos temas eran nuevos.
    pub fn bootstrap<S: AsRef<str>>(&self, topics: &[S]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        self.create_schema()?;

        let mut inserted = 0;
        for name in topics {
            let name = name.as_ref();
            let changed = tx.execute("INSERT OR IGNORE INTO Topics (name) VALUES (?1)", [name])?;
            if changed > 0 {
                debug!("Tema '{name}' añadido");
            }
            inserted += changed;
        }
        tx.commit()?;

        info!(
            "Esquema listo; {inserted} temas nuevos de {}",
            topics.len()
        );
        Ok(inserted)
    }
}
