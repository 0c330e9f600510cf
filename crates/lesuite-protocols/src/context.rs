//! Per-dispatch context handed to every handler.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::CacheStore;
use crate::clock::GameClock;
use crate::error::{CacheError, FetchError, HandlerError};
use crate::fetch::PageFetcher;
use crate::page::Page;
use crate::patch::{DomPatch, EnhancementPlan};

/// Collaborators for one dispatch: the current page, the session-scoped
/// cache, the HTTP fetcher, and the server clock.
///
/// The cache handed in must already be session-scoped; handlers use plain
/// keys like `hospital:key`.
pub struct PageContext {
    page: Page,
    cache: Arc<dyn CacheStore>,
    fetcher: Arc<dyn PageFetcher>,
    clock: GameClock,
    patches: Mutex<Vec<DomPatch>>,
}

impl PageContext {
    pub fn new(
        page: Page,
        cache: Arc<dyn CacheStore>,
        fetcher: Arc<dyn PageFetcher>,
        clock: GameClock,
    ) -> Self {
        Self {
            page,
            cache,
            fetcher,
            clock,
            patches: Mutex::new(Vec::new()),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Record a mutation for the enhancement plan.
    pub fn emit(&self, patch: DomPatch) {
        self.patches.lock().push(patch);
    }

    /// Fetch another same-origin page.
    pub async fn fetch(&self, path: &str) -> Result<Page, FetchError> {
        self.fetcher.fetch(path).await
    }

    /// Consume the context into the plan for this page.
    pub fn into_plan(self) -> EnhancementPlan {
        EnhancementPlan {
            path: self.page.path().to_string(),
            patches: self.patches.into_inner(),
        }
    }

    /// Memoized computation: return the cached value on a hit, otherwise
    /// await `compute`, store its result under `key` for `ttl_secs`, and
    /// return it. `compute` runs at most once per call.
    pub async fn cached<T, F, Fut>(
        &self,
        key: &str,
        ttl_secs: u64,
        compute: F,
    ) -> Result<T, HandlerError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T, HandlerError>> + Send,
    {
        if let Some(raw) = self.cache.get(key) {
            match serde_json::from_value::<T>(raw) {
                Ok(value) => return Ok(value),
                // Schema drift across versions: treat as a miss.
                Err(e) => debug!("discarding undecodable cache entry '{}': {}", key, e),
            }
        }

        let value = compute().await?;
        self.store(key, &value, ttl_secs)?;
        Ok(value)
    }

    /// Page-aware memoization.
    ///
    /// If the browser-equivalent is already on `target_path`, the current
    /// page is ground truth: recompute via `extract`, overwrite the cache,
    /// and ignore any hit. Otherwise behave like [`PageContext::cached`],
    /// fetching `target_path` to feed `extract` on a miss.
    pub async fn cached_with_refresh<T, F>(
        &self,
        key: &str,
        ttl_secs: u64,
        target_path: &str,
        extract: F,
    ) -> Result<T, HandlerError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&Page) -> Result<T, HandlerError> + Send + Sync,
    {
        if self.page.path() == target_path {
            let value = extract(&self.page)?;
            self.store(key, &value, ttl_secs)?;
            return Ok(value);
        }

        self.cached(key, ttl_secs, move || async move {
            let fetched = self.fetcher.fetch(target_path).await?;
            extract(&fetched)
        })
        .await
    }

    fn store<T: Serialize>(&self, key: &str, value: &T, ttl_secs: u64) -> Result<(), CacheError> {
        let raw = serde_json::to_value(value)?;
        self.cache.set(key, raw, Duration::from_secs(ttl_secs));
        Ok(())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
