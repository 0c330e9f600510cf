//! Handler registration for the engine.

use tracing::info;

use lesuite_core::PageRegistry;
use lesuite_protocols::RegistryError;

/// Build the full registry: every extension crate wires in its handlers.
pub(crate) fn build_registry() -> Result<PageRegistry, RegistryError> {
    let mut registry = PageRegistry::new();

    lesuite_pages_general::register(&mut registry)?;
    lesuite_pages_market::register(&mut registry)?;
    lesuite_pages_records::register(&mut registry)?;
    lesuite_pages_tweaks::register(&mut registry)?;

    info!(
        "Registered {} handler(s) across {} rule(s)",
        registry.handler_count(),
        registry.rule_count()
    );
    Ok(registry)
}
