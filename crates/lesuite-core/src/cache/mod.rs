//! Expiring cache stores.
//!
//! Two [`lesuite_protocols::CacheStore`] implementations plus the
//! session-scoping decorator:
//!
//! - [`MemoryCacheStore`] - per-process map, used in tests and one-shot runs
//! - [`FileCacheStore`] - JSON-file snapshot surviving across runs, the
//!   browser-profile analogue
//! - [`ScopedStore`] - salts every key with the session hash

mod file;
mod memory;
mod scoped;

pub use file::FileCacheStore;
pub use memory::MemoryCacheStore;
pub use scoped::ScopedStore;
