//! Hover tooltips for item popup links.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use lesuite_protocols::{DomPatch, HandlerError, Page, PageContext, PageHandler};

const HOVERCARD_WIDTH: u32 = 450;

/// Item links open a popup window via `javascript:modelesswin('url', ...)`.
static POPUP_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"javascript:modelesswin\('([^']+)'").expect("static pattern"));

static CENTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<center>(.*?)</center>").expect("static pattern"));

/// Popup URLs referenced on the page, deduplicated in document order.
pub fn popup_urls(page: &Page) -> Vec<String> {
    let mut urls = Vec::new();
    for caps in POPUP_LINK_RE.captures_iter(page.html()) {
        let url = caps[1].to_string();
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

/// The item card is the popup's `<center>` block.
pub fn extract_item_card(popup: &Page) -> Option<String> {
    CENTER_RE
        .captures(popup.html())
        .map(|caps| caps[1].to_string())
}

/// Turns item popup links into hover tooltips by fetching each popup and
/// inlining its item card. A popup that fails to fetch or parse only costs
/// its own tooltip.
pub struct ItemHovercards;

#[async_trait]
impl PageHandler for ItemHovercards {
    fn id(&self) -> &str {
        "item_hovercards"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        for url in popup_urls(ctx.page()) {
            let popup = match ctx.fetch(&url).await {
                Ok(popup) => popup,
                Err(e) => {
                    warn!("skipping hovercard for '{}': {}", url, e);
                    continue;
                }
            };
            let Some(card) = extract_item_card(&popup) else {
                warn!("no item card markup in '{}'", url);
                continue;
            };
            ctx.emit(DomPatch::Tooltip {
                target: format!(r#"a[href*="{url}"]"#),
                html: card,
                width: HOVERCARD_WIDTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "hovercards_tests.rs"]
mod tests;
