//! Quick heal link next to the sidebar hospital link.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use lesuite_protocols::{
    DomPatch, GameAction, HandlerError, KeyAction, Page, PageContext, PageHandler,
};

pub const HOSPITAL_KEY_CACHE_KEY: &str = "hospital:key";

/// The key survives at least an hour; the game rotates it on login.
const HOSPITAL_KEY_TTL_SECS: u64 = 60 * 60;

/// First heal link on the hospital page carries the per-session key.
static HOSPITAL_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href="[^"]*[?&]key=(\w+)"#).expect("static pattern"));

/// The self-heal request behind the quick heal link.
pub fn heal_action(key: &str) -> GameAction {
    GameAction::new("/hospital.php").with("m", "1").with("key", key)
}

/// Pull the session heal key out of the hospital page.
pub fn extract_hospital_key(page: &Page) -> Result<String, HandlerError> {
    HOSPITAL_KEY_RE
        .captures(page.html())
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| HandlerError::Scrape("no keyed heal link on hospital page".to_string()))
}

/// Adds a one-click self-heal icon after the sidebar hospital link and binds
/// it to the `h` key. The heal key is memoized so pages other than the
/// hospital don't pay a fetch on every load.
pub struct QuickHealLink;

#[async_trait]
impl PageHandler for QuickHealLink {
    fn id(&self) -> &str {
        "quick_heal_link"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        // No sidebar hospital link means no place to hang the icon.
        if !ctx.page().contains(r#"href="hospital.php""#) {
            return Ok(());
        }

        let key = ctx
            .cached(HOSPITAL_KEY_CACHE_KEY, HOSPITAL_KEY_TTL_SECS, || async {
                let hospital = ctx.fetch("/hospital.php").await?;
                extract_hospital_key(&hospital)
            })
            .await?;

        ctx.emit(DomPatch::InsertAfter {
            anchor: r#"a[href="hospital.php"]"#.to_string(),
            html: format!(r#" <a href="hospital.php?m=1&key={key}">(Heal)</a>"#),
        });
        ctx.emit(DomPatch::BindKey {
            key: "h".to_string(),
            action: KeyAction::Request {
                action: heal_action(&key),
            },
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "heal_tests.rs"]
mod tests;
