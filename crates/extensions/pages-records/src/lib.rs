//! # Record List Exports
//!
//! Copyable `data:` links next to each top 10 table on the record pages.

pub mod export;

use std::sync::Arc;

use tracing::info;

use lesuite_core::PageRegistry;
use lesuite_protocols::RegistryError;

/// Wire the record export handlers into the registry.
pub fn register(registry: &mut PageRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(export::OverallTop10Export), &["highrecords.php"])?;
    registry.register(Arc::new(export::WeeklyTop10Export), &["weekrecords.php"])?;
    registry.register(Arc::new(export::GangTop10Export), &["gangs2_4.php"])?;
    info!("Registered record export handlers");
    Ok(())
}
