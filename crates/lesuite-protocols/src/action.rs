//! Game actions: mutating GET requests against game endpoints.

use serde::{Deserialize, Serialize};

/// A fire-and-forget request against a game endpoint, e.g. the full-heal
/// call `GET /hospital.php?m=1&key=K`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
    /// Endpoint path, e.g. `/hospital.php`.
    pub path: String,

    /// Query parameters appended in order.
    pub query: Vec<(String, String)>,
}

impl GameAction {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}
