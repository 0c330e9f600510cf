//! # Legacy Suite Protocols
//!
//! Shared vocabulary for the enhancement engine.
//!
//! ## Components
//!
//! - [`Page`] - a fetched (or currently loaded) game page
//! - [`DomPatch`] / [`EnhancementPlan`] - serializable mutation instructions
//! - [`PageHandler`] - a unit of page-specific behavior
//! - [`PageContext`] - collaborators handed to every handler, including the
//!   memoizing cache helpers
//! - [`GameClock`] - server-time arithmetic with an explicit UTC offset

pub mod action;
pub mod cache;
pub mod clock;
pub mod context;
pub mod error;
pub mod fetch;
pub mod handler;
pub mod page;
pub mod patch;

pub use action::GameAction;
pub use cache::CacheStore;
pub use clock::GameClock;
pub use context::PageContext;
pub use error::{CacheError, FetchError, HandlerError, RegistryError, SessionError};
pub use fetch::PageFetcher;
pub use handler::PageHandler;
pub use page::Page;
pub use patch::{DisableTrigger, DomPatch, EnhancementPlan, KeyAction};
