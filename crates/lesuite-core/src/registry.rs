//! Path-pattern handler registry.
//!
//! A rule is a regex over the URL path plus the handlers registered under
//! it. Rules keep registration order; handlers keep registration order
//! within a rule. A handler registered under two patterns that both match a
//! path runs twice, by design.

use std::sync::Arc;

use regex::Regex;

use lesuite_protocols::{PageHandler, RegistryError};

struct Rule {
    pattern: String,
    regex: Regex,
    handlers: Vec<Arc<dyn PageHandler>>,
}

/// Explicit registry value, built once at startup and moved into the
/// dispatcher. No module-level state.
#[derive(Default)]
pub struct PageRegistry {
    rules: Vec<Rule>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register `handler` under every pattern in `patterns`.
    ///
    /// Each pattern is compiled as a regex and matched against the URL path
    /// via partial match, so `"profile.php"` matches `/profile.php`.
    pub fn register(
        &mut self,
        handler: Arc<dyn PageHandler>,
        patterns: &[&str],
    ) -> Result<(), RegistryError> {
        if patterns.is_empty() {
            return Err(RegistryError::NoPatterns);
        }

        for pattern in patterns {
            if let Some(rule) = self.rules.iter_mut().find(|r| r.pattern == *pattern) {
                rule.handlers.push(handler.clone());
            } else {
                let regex =
                    Regex::new(pattern).map_err(|e| RegistryError::InvalidPattern {
                        pattern: (*pattern).to_string(),
                        message: e.to_string(),
                    })?;
                self.rules.push(Rule {
                    pattern: (*pattern).to_string(),
                    regex,
                    handlers: vec![handler.clone()],
                });
            }
        }
        Ok(())
    }

    /// Handlers to run for `path`: the concatenation of every matching
    /// rule's handler list, in rule-registration order.
    pub fn matching(&self, path: &str) -> Vec<Arc<dyn PageHandler>> {
        self.rules
            .iter()
            .filter(|rule| rule.regex.is_match(path))
            .flat_map(|rule| rule.handlers.iter().cloned())
            .collect()
    }

    /// Number of distinct patterns.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of (handler, pattern) registrations.
    pub fn handler_count(&self) -> usize {
        self.rules.iter().map(|rule| rule.handlers.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
