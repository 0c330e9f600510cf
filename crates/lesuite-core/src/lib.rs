//! # Legacy Suite Core
//!
//! The two mechanisms everything else hangs off:
//!
//! - [`PageRegistry`] / [`Dispatcher`] - path-pattern handler registration
//!   and per-page dispatch with isolated handler failures
//! - the expiring cache stores ([`MemoryCacheStore`], [`FileCacheStore`])
//!   and the session-scoping decorator ([`ScopedStore`])
//!
//! plus [`GameClient`], the cookie-authenticated HTTP client, and the
//! session hash extraction in [`session`].

pub mod cache;
pub mod client;
pub mod dispatcher;
pub mod registry;
pub mod session;

pub use cache::{FileCacheStore, MemoryCacheStore, ScopedStore};
pub use client::GameClient;
pub use dispatcher::{DispatchReport, Dispatcher};
pub use registry::PageRegistry;
pub use session::{GameHost, session_hash};
