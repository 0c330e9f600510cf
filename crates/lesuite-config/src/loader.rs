//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").expect("static env var pattern");

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.lesuite`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.game.host, "www");
    }

    #[test]
    fn test_expand_path() {
        let expanded = ConfigLoader::expand_path("~/.lesuite/cache.json");
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
            [game]
            host = "dev"
            server_utc_offset_hours = 0

            [cache]
            path = "/tmp/cache.json"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.game.host, "dev");
        assert_eq!(config.game.server_utc_offset_hours, 0);
        assert_eq!(config.cache.path, "/tmp/cache.json");
    }

    #[test]
    fn test_env_var_expansion() {
        unsafe {
            std::env::set_var("LESUITE_TEST_COOKIE", "legacy_hash=abc");
        }
        let content = r#"
            [session]
            cookie = "${LESUITE_TEST_COOKIE}"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.session.cookie, "legacy_hash=abc");
    }

    #[test]
    fn test_missing_env_var_is_an_error() {
        let content = r#"
            [session]
            cookie = "${LESUITE_DEFINITELY_UNSET}"
        "#;
        assert!(ConfigLoader::load_str(content).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[game]").unwrap();
        writeln!(file, "host = \"dev\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.game.host, "dev");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "invalid = [unclosed";
        assert!(ConfigLoader::load_str(content).is_err());
    }
}
