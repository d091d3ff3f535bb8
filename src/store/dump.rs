use super::QuestionStore;
use crate::error::Result;
use rusqlite::types::ValueRef;

/// Volcado de una tabla completa, para diagnóstico.
#[derive(Clone, Debug)]
pub struct TableDump {
    pub name: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_owned(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => format!("'{}'", String::from_utf8_lossy(t)),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

impl QuestionStore {
    /// Todas las filas de `Topics` y `Questions`. Solo lectura.
    pub fn dump(&self) -> Result<Vec<TableDump>> {
        let mut tables = Vec::new();
        for name in ["Topics", "Questions"] {
            let mut stmt = self.conn.prepare(&format!("SELECT * FROM {name} ORDER BY id"))?;
            let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
            let width = columns.len();
            let rows = stmt
                .query_map([], |row| {
                    (0..width)
                        .map(|i| row.get_ref(i).map(render_value))
                        .collect::<rusqlite::Result<Vec<_>>>()
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            tables.push(TableDump {
                name,
                columns,
                rows,
            });
        }
        Ok(tables)
    }
}
