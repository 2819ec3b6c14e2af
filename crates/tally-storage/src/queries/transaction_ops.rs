//! Insert and read labeled transactions.

use rusqlite::{params, Connection, Row};

use tally_core::errors::TallyResult;
use tally_core::models::Example;

use crate::to_store_err;

/// Insert one example. Returns the generated row id.
pub fn insert_example(conn: &Connection, example: &Example) -> TallyResult<String> {
    let id = uuid::Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO transactions (id, description, category, sub_category, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            id,
            example.text,
            example.category,
            example.sub_category,
            chrono::Utc::now().to_rfc3339(),
        ],
    )
    .map_err(|e| to_store_err(format!("insert_example: {e}")))?;
    Ok(id)
}

/// Every example in insertion order.
pub fn fetch_all(conn: &Connection) -> TallyResult<Vec<Example>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT description, category, sub_category FROM transactions ORDER BY rowid",
        )
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map([], row_to_example)
        .map_err(|e| to_store_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_store_err(e.to_string()))
}

/// Examples filed under `category`, in insertion order.
pub fn fetch_by_category(conn: &Connection, category: &str) -> TallyResult<Vec<Example>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT description, category, sub_category FROM transactions
             WHERE category = ?1 ORDER BY rowid",
        )
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![category], row_to_example)
        .map_err(|e| to_store_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_store_err(e.to_string()))
}

pub fn count(conn: &Connection) -> TallyResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))
        .map_err(|e| to_store_err(e.to_string()))?;
    Ok(n as usize)
}

fn row_to_example(row: &Row<'_>) -> rusqlite::Result<Example> {
    Ok(Example {
        text: row.get(0)?,
        category: row.get(1)?,
        sub_category: row.get(2)?,
    })
}
