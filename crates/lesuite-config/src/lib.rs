//! # Legacy Suite Config
//!
//! TOML configuration with `${ENV_VAR}` substitution and `~` expansion.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{CacheConfig, Config, GameConfig, HttpConfig, SessionConfig};
