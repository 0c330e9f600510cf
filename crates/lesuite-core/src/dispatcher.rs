//! Per-page dispatch.

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use lesuite_protocols::{HandlerError, PageContext};

use crate::registry::PageRegistry;

/// Outcome of one dispatch.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Handler ids that completed, in execution order.
    pub ran: Vec<String>,

    /// Handlers whose failure was isolated, with the error.
    pub failed: Vec<(String, HandlerError)>,

    /// Dispatch was cut short by cancellation.
    pub cancelled: bool,
}

impl DispatchReport {
    pub fn executed(&self) -> usize {
        self.ran.len() + self.failed.len()
    }
}

/// Runs every handler whose rule matches the current path, sequentially,
/// awaiting each. One broken feature never disables the others: a handler
/// error is logged, recorded, and dispatch continues. The cancellation
/// token (the page-navigation analogue) is checked between handlers.
pub struct Dispatcher {
    registry: PageRegistry,
}

impl Dispatcher {
    pub fn new(registry: PageRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub async fn dispatch(&self, ctx: &PageContext, cancel: &CancellationToken) -> DispatchReport {
        let path = ctx.page().path();
        let handlers = self.registry.matching(path);
        debug!("dispatching {} handler(s) for {}", handlers.len(), path);

        let mut report = DispatchReport::default();
        for handler in handlers {
            if cancel.is_cancelled() {
                warn!("dispatch cancelled before handler '{}'", handler.id());
                report.cancelled = true;
                break;
            }

            match handler.run(ctx).await {
                Ok(()) => report.ran.push(handler.id().to_string()),
                Err(e) => {
                    error!("handler '{}' failed: {}", handler.id(), e);
                    report.failed.push((handler.id().to_string(), e));
                }
            }
        }
        report
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
