//! # General Page Enhancements
//!
//! Handlers that run on every page: the sidebar quick heal link and the
//! special hunt / vote reward notices.

pub mod heal;
pub mod hunting;
pub mod voting;

use std::sync::Arc;

use tracing::info;

use lesuite_core::PageRegistry;
use lesuite_protocols::patch::{FONT_AWESOME_CSS, fa_icon};
use lesuite_protocols::{DomPatch, PageContext, RegistryError};

/// Wire the general handlers into the registry.
pub fn register(registry: &mut PageRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(heal::QuickHealLink), &[".*"])?;
    registry.register(Arc::new(hunting::SpecialHuntNotice), &[".*"])?;
    registry.register(Arc::new(voting::VoteNotice), &[".*"])?;
    info!("Registered general page handlers");
    Ok(())
}

/// Exclamation icons after a nav tab image and inside the matching sidebar
/// link (the last element containing `link_text`).
pub(crate) fn emit_notice(ctx: &PageContext, tab_alt: &str, link_text: &str) {
    ctx.emit(DomPatch::EnsureStylesheet {
        href: FONT_AWESOME_CSS.to_string(),
    });
    ctx.emit(DomPatch::InsertAfter {
        anchor: format!(r#"img[alt="{tab_alt}"]"#),
        html: fa_icon("fa-exclamation-circle"),
    });
    ctx.emit(DomPatch::AppendInto {
        target: format!(r#":contains("{link_text}"):last"#),
        html: fa_icon("fa-exclamation-circle"),
    });
}
