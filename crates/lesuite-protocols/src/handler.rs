//! Page handler trait.

use async_trait::async_trait;

use crate::context::PageContext;
use crate::error::HandlerError;

/// A unit of page-specific behavior.
///
/// Handlers are registered against one or more path patterns and run once
/// per dispatch when the current path matches. They scrape the page through
/// the [`PageContext`], optionally reading through the session cache, and
/// emit [`crate::patch::DomPatch`]es.
///
/// A returned error aborts only this handler; the dispatcher isolates the
/// failure and continues with its siblings.
#[async_trait]
pub trait PageHandler: Send + Sync {
    /// Stable identifier used in logs and dispatch reports.
    fn id(&self) -> &str;

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError>;
}
