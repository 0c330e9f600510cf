//! A single game page: URL path plus raw server-rendered markup.

/// A fetched or currently loaded page.
///
/// The engine never builds a DOM; handlers scrape the raw HTML with regexes,
/// matching the shallow heuristics the game's markup tolerates.
#[derive(Debug, Clone)]
pub struct Page {
    path: String,
    html: String,
}

impl Page {
    pub fn new(path: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            html: html.into(),
        }
    }

    /// URL path this page was served from, e.g. `/profile.php`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw HTML body.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Substring test over the raw markup.
    pub fn contains(&self, needle: &str) -> bool {
        self.html.contains(needle)
    }
}
