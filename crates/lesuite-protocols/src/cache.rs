//! Expiring key/value cache trait.

use std::time::Duration;

use serde_json::Value;

/// A key/value store with per-entry time-to-live.
///
/// Contract:
/// - `get` never blocks and never performs I/O; an absent or expired key is
///   a miss, never a stale value.
/// - `set` unconditionally overwrites any prior entry, value and expiry both.
/// - `sweep` lazily evicts expired entries; the engine runs it once per
///   dispatch. Reads of expired-but-unswept entries still miss.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&self, key: &str, value: Value, ttl: Duration);

    /// Drop expired entries, returning how many were removed.
    fn sweep(&self) -> usize;
}
