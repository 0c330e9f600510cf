//! Error types shared across the engine.

mod cache;
mod fetch;
mod handler;
mod registry;
mod session;

pub use cache::CacheError;
pub use fetch::FetchError;
pub use handler::HandlerError;
pub use registry::RegistryError;
pub use session::SessionError;
