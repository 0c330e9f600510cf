//! In-memory expiring store.

use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;

use lesuite_protocols::CacheStore;

#[derive(Clone)]
struct Entry {
    value: Value,
    expires_at: DateTime<Utc>,
}

/// Thread-safe in-process cache with per-entry expiry.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: DashMap<String, Entry>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<Value> {
        let entry = self.entries.get(key)?;
        if entry.expires_at > now {
            return Some(entry.value.clone());
        }
        None
    }

    fn set_at(&self, key: &str, value: Value, ttl: Duration, now: DateTime<Utc>) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: expiry(now, ttl),
            },
        );
    }

    fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before - self.entries.len()
    }
}

pub(crate) fn expiry(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

impl CacheStore for MemoryCacheStore {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn secs(n: i64) -> DateTime<Utc> {
        t0() + chrono::Duration::seconds(n)
    }

    #[test]
    fn test_get_before_and_after_expiry() {
        let store = MemoryCacheStore::new();
        store.set_at("k", json!(42), Duration::from_secs(2), t0());

        assert_eq!(store.get_at("k", secs(1)), Some(json!(42)));
        assert_eq!(store.get_at("k", secs(3)), None);
    }

    #[test]
    fn test_expiry_boundary_is_a_miss() {
        let store = MemoryCacheStore::new();
        store.set_at("k", json!(1), Duration::from_secs(2), t0());
        assert_eq!(store.get_at("k", secs(2)), None);
    }

    #[test]
    fn test_absent_key_is_a_miss() {
        let store = MemoryCacheStore::new();
        assert_eq!(store.get_at("missing", t0()), None);
    }

    #[test]
    fn test_set_overwrites_value_and_expiry() {
        let store = MemoryCacheStore::new();
        store.set_at("k", json!("old"), Duration::from_secs(100), t0());
        store.set_at("k", json!("new"), Duration::from_secs(2), t0());

        assert_eq!(store.get_at("k", secs(1)), Some(json!("new")));
        // Last write wins for the expiry too.
        assert_eq!(store.get_at("k", secs(50)), None);
    }

    #[test]
    fn test_sweep_drops_only_expired() {
        let store = MemoryCacheStore::new();
        store.set_at("short", json!(1), Duration::from_secs(1), t0());
        store.set_at("long", json!(2), Duration::from_secs(100), t0());

        assert_eq!(store.sweep_at(secs(10)), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_at("long", secs(10)), Some(json!(2)));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let store = MemoryCacheStore::new();
        store.set_at("k", json!(1), Duration::from_secs(u64::MAX), t0());
        assert_eq!(store.get_at("k", secs(1_000_000)), Some(json!(1)));
    }
}
