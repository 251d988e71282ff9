//! # Key-Value Storage
//!
//! The controller persists through a small asynchronous key-value contract
//! and treats the backend as a black box:
//!
//! ```text
//! get(key)        -> Option<text>
//! set(key, text)  -> ()
//! ```
//!
//! Both operations may fail. There is no transactionality across a `get`
//! and a later `set`.
//!
//! ## Backends
//!
//! - [`FileStore`]: all slots in one JSON object on disk
//! - [`MemoryStore`]: process-local map, used for `--ephemeral` and tests

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while reading or writing a slot.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure (permissions, missing parent, disk full).
    Io(std::io::Error),
    /// The backing file exists but is not a JSON object of string slots.
    Decode(serde_json::Error),
    /// The slot map could not be serialized.
    Encode(serde_json::Error),
    /// Backend refused the operation (used by the in-memory store in tests).
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Decode(e) => write!(f, "store decode error: {e}"),
            StoreError::Encode(e) => write!(f, "store encode error: {e}"),
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Read the value stored under `key`. `Ok(None)` when the slot is empty.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the slot `key` with `value`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
