//! Session scoping decorator.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use lesuite_protocols::CacheStore;

/// Salts every key with the session hash so cached values never leak across
/// different logged-in accounts sharing a cache file.
pub struct ScopedStore {
    inner: Arc<dyn CacheStore>,
    session_hash: String,
}

impl ScopedStore {
    pub fn new(inner: Arc<dyn CacheStore>, session_hash: impl Into<String>) -> Self {
        Self {
            inner,
            session_hash: session_hash.into(),
        }
    }

    /// The scoped form of `key`: `"{key}:{session_hash}"`.
    pub fn scope(&self, key: &str) -> String {
        format!("{}:{}", key, self.session_hash)
    }
}

impl CacheStore for ScopedStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.inner.get(&self.scope(key))
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) {
        self.inner.set(&self.scope(key), value, ttl);
    }

    fn sweep(&self) -> usize {
        // Sweeping is store-wide; expiry does not depend on the session.
        self.inner.sweep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheStore;
    use serde_json::json;

    #[test]
    fn test_scope_appends_session_hash() {
        let scoped = ScopedStore::new(Arc::new(MemoryCacheStore::new()), "abc123");
        assert_eq!(scoped.scope("hospital:key"), "hospital:key:abc123");
    }

    #[test]
    fn test_sessions_never_share_entries() {
        let inner = Arc::new(MemoryCacheStore::new());
        let alice = ScopedStore::new(inner.clone(), "alice");
        let bob = ScopedStore::new(inner.clone(), "bob");

        alice.set("voting:canvote", json!(true), Duration::from_secs(60));

        assert_eq!(alice.get("voting:canvote"), Some(json!(true)));
        assert_eq!(bob.get("voting:canvote"), None);
        assert_ne!(alice.scope("voting:canvote"), bob.scope("voting:canvote"));
    }

    #[test]
    fn test_reads_and_writes_pass_through() {
        let inner = Arc::new(MemoryCacheStore::new());
        let scoped = ScopedStore::new(inner.clone(), "h");

        scoped.set("k", json!("v"), Duration::from_secs(60));
        assert_eq!(inner.get("k:h"), Some(json!("v")));
        assert_eq!(scoped.get("k"), Some(json!("v")));
    }
}
