//! # List Persistence
//!
//! Bridges the in-memory list and one key-value slot.
//!
//! The slot holds the JSON encoding of an array of strings
//! (`["milk","bread"]`). Every write overwrites the whole list. There is no
//! partial write and no version field.
//!
//! Failures never reach the user: reads fall back to an empty list, writes
//! are logged and dropped. The next mutation's write re-attempts naturally.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::storage::KeyValueStore;

/// Serialize the list into the slot's text form.
pub fn encode_items(items: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Parse the slot's text form back into a list.
pub fn decode_items(text: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read the list stored under `key`.
///
/// Absent slot, read failure and unparsable value all yield an empty list.
pub async fn load_items(store: &dyn KeyValueStore, key: &str) -> Vec<String> {
    let stored = match store.get(key).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            info!("No stored list under '{}' ({} store)", key, store.name());
            return Vec::new();
        }
        Err(e) => {
            warn!("Error loading list '{}': {}", key, e);
            return Vec::new();
        }
    };

    match decode_items(&stored) {
        Ok(items) => {
            info!("Loaded {} items from '{}' ({} store)", items.len(), key, store.name());
            items
        }
        Err(e) => {
            warn!("Stored list '{}' is not a string array, starting empty: {}", key, e);
            Vec::new()
        }
    }
}

/// Overwrite `key` with the full list. Failures are logged and ignored.
pub async fn save_items(store: &dyn KeyValueStore, key: &str, items: &[String]) {
    let text = match encode_items(items) {
        Ok(text) => text,
        Err(e) => {
            warn!("Error encoding list '{}': {}", key, e);
            return;
        }
    };
    match store.set(key, &text).await {
        Ok(()) => debug!("Saved {} items to '{}'", items.len(), key),
        Err(e) => warn!("Error saving list '{}': {}", key, e),
    }
}

/// Background writer that applies list snapshots to the store one at a time,
/// in the order they were submitted.
///
/// The TUI loop is synchronous; it hands snapshots over a channel and never
/// waits on storage. Pending writes are never aborted: `shutdown()` closes the
/// channel and waits for the queue to drain.
pub struct Persister {
    tx: mpsc::UnboundedSender<Vec<String>>,
    handle: JoinHandle<()>,
}

impl Persister {
    /// Spawn the writer task. Must be called from within a tokio runtime.
    pub fn spawn(store: Arc<dyn KeyValueStore>, key: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Vec<String>>();
        let handle = tokio::spawn(async move {
            let mut writes = 0usize;
            while let Some(items) = rx.recv().await {
                save_items(store.as_ref(), &key, &items).await;
                writes += 1;
            }
            debug!("Persister for '{}' stopped after {} writes", key, writes);
        });
        Self { tx, handle }
    }

    /// Queue a write of `items`.
    pub fn submit(&self, items: &[String]) {
        if self.tx.send(items.to_vec()).is_err() {
            warn!("Failed to queue list write: persister stopped");
        }
    }

    /// Close the queue and wait for every pending write to finish.
    pub async fn shutdown(self) {
        let Self { tx, handle } = self;
        drop(tx);
        if let Err(e) = handle.await {
            warn!("Persister task failed: {}", e);
        }
    }
}
