//! SqliteLabelStore — one serialized connection, migrations on open.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use tally_core::config::StorageConfig;
use tally_core::errors::{StoreError, TallyResult};
use tally_core::models::Example;
use tally_core::traits::ILabelStore;

use crate::migrations;
use crate::pragmas;
use crate::queries::transaction_ops;

/// Label store persisted in a SQLite database.
pub struct SqliteLabelStore {
    conn: Mutex<Connection>,
}

impl SqliteLabelStore {
    /// Open (or create) a database file with default settings.
    pub fn open(path: &Path) -> TallyResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> TallyResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> TallyResult<Self> {
        let conn = Connection::open(path).map_err(|e| StoreError::Unavailable {
            reason: format!("{}: {e}", path.display()),
        })?;
        pragmas::apply_pragmas(&conn, config.busy_timeout_ms)?;
        Self::initialize(conn)
    }

    /// Open a private in-memory database (for testing).
    pub fn open_in_memory() -> TallyResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Unavailable {
            reason: e.to_string(),
        })?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> TallyResult<Self> {
        let version = migrations::run_migrations(&conn)?;
        tracing::debug!(schema_version = version, "label store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Current schema version.
    pub fn schema_version(&self) -> TallyResult<u32> {
        let conn = self.lock()?;
        migrations::current_version(&conn)
    }

    /// Stored examples filed under `category`.
    pub fn fetch_by_category(&self, category: &str) -> TallyResult<Vec<Example>> {
        let conn = self.lock()?;
        transaction_ops::fetch_by_category(&conn, category)
    }

    /// Whether the connection runs in WAL mode (false for in-memory databases).
    pub fn is_wal(&self) -> TallyResult<bool> {
        let conn = self.lock()?;
        pragmas::verify_wal_mode(&conn)
    }

    fn lock(&self) -> TallyResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            StoreError::Unavailable {
                reason: format!("connection lock poisoned: {e}"),
            }
            .into()
        })
    }
}

impl ILabelStore for SqliteLabelStore {
    fn fetch_all(&self) -> TallyResult<Vec<Example>> {
        let conn = self.lock()?;
        transaction_ops::fetch_all(&conn)
    }

    fn append(&self, example: &Example) -> TallyResult<()> {
        let conn = self.lock()?;
        let id = transaction_ops::insert_example(&conn, example)?;
        tracing::debug!(id = %id, category = %example.category, "example appended");
        Ok(())
    }

    fn count(&self) -> TallyResult<usize> {
        let conn = self.lock()?;
        transaction_ops::count(&conn)
    }
}
