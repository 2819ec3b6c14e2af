//! Versioned schema migrations, tracked in `schema_version`.

mod v001_transactions;
mod v002_category_index;

use rusqlite::{params, Connection};

use tally_core::errors::{StoreError, TallyResult};

use crate::to_store_err;

type Migration = fn(&Connection) -> TallyResult<()>;

/// Every migration, in version order.
const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_transactions::migrate),
    (2, v002_category_index::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Current schema version (0 for a fresh database).
pub fn current_version(conn: &Connection) -> TallyResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_store_err(e.to_string()))
}

/// Apply every pending migration. Each one runs in its own transaction.
/// Returns the schema version after migrating.
pub fn run_migrations(conn: &Connection) -> TallyResult<u32> {
    let start = current_version(conn)?;
    let mut version = start;

    for &(target, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > start) {
        let failed = |reason: String| StoreError::MigrationFailed {
            version: target,
            reason,
        };
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(e.to_string()))?;
        migrate(&tx).map_err(|e| failed(e.to_string()))?;
        tx.execute(
            "INSERT INTO schema_version (version, applied_at) VALUES (?1, ?2)",
            params![target, chrono::Utc::now().to_rfc3339()],
        )
        .map_err(|e| failed(e.to_string()))?;
        tx.commit().map_err(|e| failed(e.to_string()))?;

        tracing::info!("schema migrated to v{target:03}");
        version = target;
    }

    Ok(version)
}
