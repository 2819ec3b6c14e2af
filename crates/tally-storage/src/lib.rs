//! # tally-storage
//!
//! [`ILabelStore`](tally_core::ILabelStore) implementations.
//!
//! - [`MemoryLabelStore`]: a locked `Vec`, for tests and embedding.
//! - [`SqliteLabelStore`]: a `transactions` table in SQLite, versioned
//!   migrations, WAL for file-backed databases.

pub mod memory_store;
pub mod migrations;
pub mod pragmas;
pub mod queries;
pub mod sqlite_store;

pub use memory_store::MemoryLabelStore;
pub use sqlite_store::SqliteLabelStore;

use tally_core::errors::{StoreError, TallyError};

/// Wrap a SQLite failure message as a [`TallyError`].
pub(crate) fn to_store_err(message: impl Into<String>) -> TallyError {
    StoreError::SqliteError {
        message: message.into(),
    }
    .into()
}
