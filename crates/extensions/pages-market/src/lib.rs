//! # Market Page Enhancements
//!
//! Stand listing defaults and item hovercards.

pub mod hovercards;
pub mod stand;

use std::sync::Arc;

use tracing::info;

use lesuite_core::PageRegistry;
use lesuite_protocols::RegistryError;

/// Wire the market handlers into the registry.
pub fn register(registry: &mut PageRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(stand::StandDefaults), &["market3.php"])?;
    registry.register(
        Arc::new(hovercards::ItemHovercards),
        &["profile.php", "market2.php", "market3.php", "market6.php"],
    )?;
    info!("Registered market page handlers");
    Ok(())
}
