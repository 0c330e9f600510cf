//! Session identification.
//!
//! The game sets a per-login hash cookie whose name depends on the
//! deployment. Extraction failure is a startup error: an unauthenticated
//! engine cannot scope its cache and must not run.

use regex::Regex;

use lesuite_protocols::SessionError;

/// Which deployment of the game is being enhanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameHost {
    /// `www.legacy-game.net`
    Production,

    /// `dev.legacy-game.net`
    Dev,
}

impl GameHost {
    /// Parse the subdomain as configured, e.g. `"www"` or `"dev"`.
    pub fn parse(subdomain: &str) -> Result<Self, SessionError> {
        match subdomain {
            "www" => Ok(Self::Production),
            "dev" => Ok(Self::Dev),
            other => Err(SessionError::UnknownHost(other.to_string())),
        }
    }

    pub fn cookie_name(self) -> &'static str {
        match self {
            Self::Production => "legacy_hash",
            Self::Dev => "legacy_hash_dev",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => "http://www.legacy-game.net",
            Self::Dev => "http://dev.legacy-game.net",
        }
    }
}

/// Extract the session hash from a raw `Cookie` header value.
pub fn session_hash(host: GameHost, cookie: &str) -> Result<String, SessionError> {
    let pattern = format!(r"{}=(\w+)", host.cookie_name());
    let re = Regex::new(&pattern).expect("static cookie pattern");
    re.captures(cookie)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| SessionError::MissingCookie(host.cookie_name().to_string()))
}
