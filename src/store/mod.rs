// src/store/mod.rs

use crate::error::{QuizError, Result, Violation};
use crate::model::{AnswerLetter, Question, QuestionFields, Topic};
use log::{debug, error, info, warn};
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params};
use std::path::Path;

mod dump;
mod schema;
mod seed;

pub use dump::TableDump;
pub use seed::SeedReport;

const QUESTION_COLUMNS: &str =
    "id, topic_id, question_text, option_a, option_b, option_c, option_d, option_e, correct_answer";

pub(crate) const INSERT_QUESTION: &str =
    "INSERT INTO Questions (topic_id, question_text, option_a, option_b, option_c, option_d,
                            option_e, correct_answer)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

/// Acceso a la base SQLite local (temas y preguntas).
///
/// Se abre una vez al arrancar y se comparte (vía `Rc`) entre la ventana del
/// quiz y el panel de administración. Todas las llamadas son síncronas y cada
/// escritura va en su propia transacción, así que un fallo no deja datos a medias.
pub struct QuestionStore {
    conn: Connection,
}

// Fila tal cual viene de la tabla; la letra se valida al convertir
struct QuestionRow {
    id: i64,
    topic_id: i64,
    question_text: String,
    option_a: String,
    option_b: String,
    option_c: String,
    option_d: String,
    option_e: String,
    correct_answer: String,
}

impl QuestionRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            topic_id: row.get(1)?,
            question_text: row.get(2)?,
            option_a: row.get(3)?,
            option_b: row.get(4)?,
            option_c: row.get(5)?,
            option_d: row.get(6)?,
            option_e: row.get(7)?,
            correct_answer: row.get(8)?,
        })
    }

    fn into_question(self) -> Result<Question> {
        let correct_answer: AnswerLetter =
            self.correct_answer.parse().map_err(|_| QuizError::MalformedRow {
                id: self.id,
                value: self.correct_answer.clone(),
            })?;
        Ok(Question {
            id: self.id,
            topic_id: self.topic_id,
            fields: QuestionFields {
                question_text: self.question_text,
                option_a: self.option_a,
                option_b: self.option_b,
                option_c: self.option_c,
                option_d: self.option_d,
                option_e: self.option_e,
                correct_answer,
            },
        })
    }
}

fn check_fields(fields: &QuestionFields) -> Result<()> {
    let violations: Vec<Violation> = fields
        .empty_fields()
        .into_iter()
        .map(Violation::Empty)
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(QuizError::Validation(violations))
    }
}

fn foreign_key_error(topic_id: i64) -> impl Fn(rusqlite::Error) -> QuizError {
    move |e| match &e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            QuizError::Referential { topic_id }
        }
        _ => QuizError::Storage(e),
    }
}

impl QuestionStore {
    /// Abre una base ya existente. No la crea: eso es trabajo de `quiz_bowl_setup`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuizError::StorageUnavailable(format!(
                "Database file '{}' not found.",
                path.display()
            )));
        }
        let unavailable =
            |e: rusqlite::Error| QuizError::StorageUnavailable(format!("{}: {e}", path.display()));

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;
        let store = Self::from_connection(conn).map_err(|e| match e {
            QuizError::Storage(inner) => unavailable(inner),
            other => other,
        })?;

        if !store.has_schema().map_err(|e| QuizError::StorageUnavailable(e.to_string()))? {
            return Err(QuizError::StorageUnavailable(format!(
                "'{}' has no Topics/Questions tables. Run quiz_bowl_setup first.",
                path.display()
            )));
        }
        info!("Base de datos abierta: {}", path.display());
        Ok(store)
    }

    /// Abre o crea el fichero (lo usa el binario de instalación).
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| QuizError::StorageUnavailable(format!("{}: {e}", path.display())))?;
        Self::from_connection(conn)
    }

    /// Base vacía en memoria con el esquema ya creado.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self::from_connection(Connection::open_in_memory()?)?;
        store.create_schema()?;
        Ok(store)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    // ----------- TEMAS -----------

    /// Temas ordenados por nombre. Nunca falla: ante un error de SQLite
    /// se registra y se devuelve la lista vacía.
    pub fn list_topics(&self) -> Vec<Topic> {
        match self.query_topics() {
            Ok(topics) => topics,
            Err(e) => {
                error!("Error leyendo temas: {e}");
                Vec::new()
            }
        }
    }

    fn query_topics(&self) -> Result<Vec<Topic>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM Topics ORDER BY name")?;
        let topics = stmt
            .query_map([], |row| {
                Ok(Topic {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("{} temas cargados", topics.len());
        Ok(topics)
    }

    pub fn get_topic(&self, id: i64) -> Result<Topic> {
        self.conn
            .query_row("SELECT id, name FROM Topics WHERE id = ?1", [id], |row| {
                Ok(Topic {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?
            .ok_or(QuizError::NotFound { entity: "Topic", id })
    }

    /// Búsqueda exacta (distingue mayúsculas)
    pub fn find_topic_by_name(&self, name: &str) -> Result<Option<Topic>> {
        let topic = self
            .conn
            .query_row(
                "SELECT id, name FROM Topics WHERE name = ?1",
                [name],
                |row| {
                    Ok(Topic {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(topic)
    }

    fn topic_exists(&self, topic_id: i64) -> Result<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM Topics WHERE id = ?1)",
            [topic_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    // ----------- PREGUNTAS -----------

    /// Preguntas de un tema por id ascendente. Las filas con una respuesta
    /// correcta fuera de A..E se saltan con un aviso.
    pub fn list_questions(&self, topic_id: i64) -> Result<Vec<Question>> {
        let sql =
            format!("SELECT {QUESTION_COLUMNS} FROM Questions WHERE topic_id = ?1 ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([topic_id], QuestionRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let questions: Vec<Question> = rows
            .into_iter()
            .filter_map(|row| match row.into_question() {
                Ok(q) => Some(q),
                Err(e) => {
                    warn!("Fila ignorada: {e}");
                    None
                }
            })
            .collect();
        debug!("{} preguntas para el tema {topic_id}", questions.len());
        Ok(questions)
    }

    pub fn count_questions(&self, topic_id: i64) -> Result<usize> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM Questions WHERE topic_id = ?1",
            [topic_id],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }

    pub fn get_question(&self, id: i64) -> Result<Question> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM Questions WHERE id = ?1");
        self.conn
            .query_row(&sql, [id], QuestionRow::from_row)
            .optional()?
            .ok_or(QuizError::NotFound {
                entity: "Question",
                id,
            })?
            .into_question()
    }

    pub fn create_question(&self, topic_id: i64, fields: &QuestionFields) -> Result<Question> {
        check_fields(fields)?;

        let tx = self.conn.unchecked_transaction()?;
        if !self.topic_exists(topic_id)? {
            warn!("Alta rechazada: el tema {topic_id} no existe");
            return Err(QuizError::Referential { topic_id });
        }
        tx.execute(
            INSERT_QUESTION,
            params![
                topic_id,
                fields.question_text,
                fields.option_a,
                fields.option_b,
                fields.option_c,
                fields.option_d,
                fields.option_e,
                fields.correct_answer.as_str(),
            ],
        )
        .map_err(foreign_key_error(topic_id))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!("Pregunta {id} creada en el tema {topic_id}");
        Ok(Question {
            id,
            topic_id,
            fields: fields.clone(),
        })
    }

    pub fn update_question(&self, id: i64, fields: &QuestionFields) -> Result<Question> {
        check_fields(fields)?;

        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute(
            "UPDATE Questions SET question_text = ?1, option_a = ?2, option_b = ?3, option_c = ?4,
                option_d = ?5, option_e = ?6, correct_answer = ?7
             WHERE id = ?8",
            params![
                fields.question_text,
                fields.option_a,
                fields.option_b,
                fields.option_c,
                fields.option_d,
                fields.option_e,
                fields.correct_answer.as_str(),
                id,
            ],
        )?;
        if changed == 0 {
            return Err(QuizError::NotFound {
                entity: "Question",
                id,
            });
        }
        tx.commit()?;

        info!("Pregunta {id} actualizada");
        self.get_question(id)
    }

    pub fn delete_question(&self, id: i64) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM Questions WHERE id = ?1", [id])?;
        if removed == 0 {
            warn!("No se pudo borrar la pregunta {id}: no existe");
            return Err(QuizError::NotFound {
                entity: "Question",
                id,
            });
        }
        info!("Pregunta {id} borrada");
        Ok(())
    }

    /// Borra un tema y, por la cascada, todas sus preguntas. La interfaz no lo expone.
    pub fn delete_topic(&self, id: i64) -> Result<()> {
        let removed = self.conn.execute("DELETE FROM Topics WHERE id = ?1", [id])?;
        if removed == 0 {
            return Err(QuizError::NotFound { entity: "Topic", id });
        }
        info!("Tema {id} borrado junto con sus preguntas");
        Ok(())
    }
}

#[cfg(test)]
impl QuestionStore {
    /// SQL directo para dejar la base en estados que la API no permite
    pub(crate) fn execute_raw(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }
}
