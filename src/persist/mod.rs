//! Key-value persistence for state that outlives a session
//!
//! The engine stores a handful of named binary records (the memory queue and
//! the selected theme) through the [`KeyValueStore`] trait:
//!
//! - [`file`]: one file per record inside a data directory
//! - [`memory`]: records kept in a hash map, nothing written to disk
//! - [`records`]: encoding of the engine's records to and from bytes
//!
//! Store failures never stop the calculator. Callers log them and keep the
//! in-memory state as the source of truth for the session.

pub mod file;
pub mod memory;
pub mod records;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::io;
use thiserror::Error;

/// Errors raised by a persistence store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Record names are restricted to ASCII letters, digits and `_`
    #[error("invalid record name '{0}'")]
    InvalidName(String),

    /// A record exists but cannot be decoded
    #[error("record '{record}' is corrupt: {reason}")]
    Corrupt { record: String, reason: String },
}

/// A store of named opaque blobs
pub trait KeyValueStore {
    /// Read a record. `Ok(None)` means the record was never written.
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace a record with `data`
    fn write(&mut self, name: &str, data: &[u8]) -> Result<(), StoreError>;
}

pub(crate) fn validate_name(name: &str) -> Result<(), StoreError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}
