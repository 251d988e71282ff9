//! File-backed key-value store.
//!
//! Every slot lives in a single JSON object:
//!
//! ```text
//! {
//!   "items": "[\"milk\",\"bread\"]"
//! }
//! ```
//!
//! A missing file means "no slots". Writes read the current map, replace one
//! slot, then write the whole file atomically (write `.tmp`, then `rename()`).

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;
use tokio::sync::Mutex;

use super::{KeyValueStore, StoreError};

type Slots = BTreeMap<String, String>;

pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the backing file.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_slots(&self) -> Result<Slots, StoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Slots::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        if json.trim().is_empty() {
            return Ok(Slots::new());
        }
        serde_json::from_str(&json).map_err(StoreError::Decode)
    }

    async fn write_slots(&self, slots: &Slots) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(slots).map_err(StoreError::Encode)?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut slots = self.read_slots().await?;
        Ok(slots.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut slots = match self.read_slots().await {
            Ok(slots) => slots,
            Err(StoreError::Decode(e)) => {
                warn!(
                    "Store file {} is corrupt, replacing it: {}",
                    self.path.display(),
                    e
                );
                Slots::new()
            }
            Err(e) => return Err(e),
        };
        slots.insert(key.to_string(), value.to_string());
        self.write_slots(&slots).await?;
        debug!(
            "Wrote slot '{}' ({} bytes) to {}",
            key,
            value.len(),
            self.path.display()
        );
        Ok(())
    }
}
