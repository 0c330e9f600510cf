//! # Page Tweaks
//!
//! Small quality-of-life fixes: number formatting, delete confirmations,
//! pruned select lists, multi-attack guards, map coordinates, and boost
//! duration formatting.

pub mod abilities;
pub mod boosts;
pub mod combat;
pub mod messages;
pub mod profile;
pub mod wasteland;

use std::sync::Arc;

use tracing::info;

use lesuite_core::PageRegistry;
use lesuite_protocols::RegistryError;

/// Wire the tweak handlers into the registry.
pub fn register(registry: &mut PageRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(profile::ExpCommaFormat), &["profile.php"])?;
    registry.register(Arc::new(messages::DeleteMailConfirm), &["messages.php"])?;
    registry.register(Arc::new(abilities::TrainedAbilityTrim), &["information2.php"])?;
    registry.register(
        Arc::new(combat::MultiAttackGuard),
        &[r"fight\d*.php", r"hunting\d*.php", "map2.php"],
    )?;
    registry.register(Arc::new(wasteland::MapCoordTooltip), &["map.php"])?;
    registry.register(Arc::new(boosts::BoostTimeFormat), &["platinum_store.php"])?;
    info!("Registered page tweak handlers");
    Ok(())
}
