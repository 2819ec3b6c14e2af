//! v002: index for per-category lookups.

use rusqlite::Connection;

use tally_core::errors::TallyResult;

use crate::to_store_err;

pub fn migrate(conn: &Connection) -> TallyResult<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_transactions_category
            ON transactions (category, sub_category);",
    )
    .map_err(|e| to_store_err(e.to_string()))
}
