//! v001: labeled transactions table.

use rusqlite::Connection;

use tally_core::errors::TallyResult;

use crate::to_store_err;

pub fn migrate(conn: &Connection) -> TallyResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS transactions (
            id           TEXT PRIMARY KEY,
            description  TEXT NOT NULL,
            category     TEXT NOT NULL,
            sub_category TEXT NOT NULL DEFAULT '',
            created_at   TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_store_err(e.to_string()))
}
