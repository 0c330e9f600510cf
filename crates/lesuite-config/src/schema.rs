//! Configuration schema.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub session: SessionConfig,
    pub http: HttpConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Game subdomain: `"www"` (production) or `"dev"`.
    pub host: String,

    /// Overrides the host-derived base URL when set; mainly for tests.
    pub base_url: Option<String>,

    /// Server clock offset from UTC. Legacy runs on EST.
    pub server_utc_offset_hours: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            host: "www".to_string(),
            base_url: None,
            server_utc_offset_hours: -5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Raw `Cookie` header value for an authenticated game session.
    pub cookie: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("lesuite/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Path of the JSON cache snapshot; `~` is expanded.
    pub path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: "~/.lesuite/cache.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.game.host, "www");
        assert_eq!(config.game.server_utc_offset_hours, -5);
        assert!(config.game.base_url.is_none());
        assert_eq!(config.http.timeout_seconds, 30);
        assert!(config.cache.path.ends_with("cache.json"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [game]
            host = "dev"
            "#,
        )
        .unwrap();
        assert_eq!(config.game.host, "dev");
        assert_eq!(config.game.server_utc_offset_hours, -5);
        assert_eq!(config.http.timeout_seconds, 30);
    }
}
