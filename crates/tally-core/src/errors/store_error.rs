/// Label store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("label store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}
