//! JSON-file-backed expiring store.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use lesuite_protocols::CacheStore;

use super::memory::expiry;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    value: Value,
    expires_at: DateTime<Utc>,
}

/// Expiring store that survives across runs.
///
/// The snapshot is loaded once at [`FileCacheStore::open`]; `get`/`set`/
/// `sweep` touch memory only, and the engine calls [`FileCacheStore::persist`]
/// once after dispatch. Expiries are wall-clock timestamps so entries
/// written by a previous run still expire on time.
pub struct FileCacheStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, Entry>>,
}

impl FileCacheStore {
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("discarding unreadable cache file {}: {}", path.display(), e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Write the snapshot to disk, creating parent directories as needed.
    pub fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&*self.entries.read()).map_err(io::Error::other)?;
        std::fs::write(&self.path, json)?;
        debug!("persisted cache to {}", self.path.display());
        Ok(())
    }

    /// Drop every entry, expired or not.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<Value> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.expires_at > now {
            return Some(entry.value.clone());
        }
        None
    }

    fn set_at(&self, key: &str, value: Value, ttl: Duration, now: DateTime<Utc>) {
        self.entries.write().insert(
            key.to_string(),
            Entry {
                value,
                expires_at: expiry(now, ttl),
            },
        );
    }

    fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }
}

impl CacheStore for FileCacheStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.get_at(key, Utc::now())
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) {
        self.set_at(key, value, ttl, Utc::now());
    }

    fn sweep(&self) -> usize {
        self.sweep_at(Utc::now())
    }
}
