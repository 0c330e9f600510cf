//! Special hunt availability notice.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use lesuite_protocols::{HandlerError, Page, PageContext, PageHandler};

use crate::emit_notice;

pub const SPECIAL_HUNT_CACHE_KEY: &str = "hunting:specialhunttime";

/// The countdown spans days; six hours of staleness is acceptable drift.
const SPECIAL_HUNT_TTL_SECS: u64 = 6 * 60 * 60;

/// Players below the level gate never see this heading on the hunting page.
const CAPABILITY_MARKER: &str = "Special Character Hunting";

static FONT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<font[^>]*>(.*?)</font>").expect("static pattern"));
static DAYS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+) day").expect("static pattern"));
static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+) hour").expect("static pattern"));
static MINUTES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+) minute").expect("static pattern"));
static SECONDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+) second").expect("static pattern"));

fn component(re: &Regex, html: &str) -> i64 {
    // The game drops zero components entirely; absent means zero.
    re.captures(html)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Seconds until the next special hunt, read off the hunting page.
///
/// `None` when the page carries no special hunting section, e.g. the
/// character is below the level gate.
pub fn parse_special_hunt_wait(page: &Page) -> Option<i64> {
    if !page.contains(CAPABILITY_MARKER) {
        return None;
    }
    // The countdown lives in the "can hunt again" font element; numbers
    // elsewhere on the page must not count. No countdown text means the
    // hunt is ready now.
    let countdown = FONT_RE
        .captures_iter(page.html())
        .find_map(|caps| {
            let text = caps.get(1)?.as_str();
            text.contains("can hunt again").then_some(text)
        })
        .unwrap_or("");
    Some(
        component(&DAYS_RE, countdown) * 86_400
            + component(&HOURS_RE, countdown) * 3_600
            + component(&MINUTES_RE, countdown) * 60
            + component(&SECONDS_RE, countdown),
    )
}

/// Shows a notice on every page once the special hunt cooldown has elapsed.
/// The availability timestamp comes from the hunting page and is refreshed
/// whenever that page itself is dispatched.
pub struct SpecialHuntNotice;

#[async_trait]
impl PageHandler for SpecialHuntNotice {
    fn id(&self) -> &str {
        "special_hunt_notice"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        let now = ctx.clock().now().timestamp();
        let available_at: Option<i64> = ctx
            .cached_with_refresh(
                SPECIAL_HUNT_CACHE_KEY,
                SPECIAL_HUNT_TTL_SECS,
                "/hunting.php",
                move |page: &Page| -> Result<Option<i64>, HandlerError> {
                    Ok(parse_special_hunt_wait(page).map(|wait| now + wait))
                },
            )
            .await?;

        if matches!(available_at, Some(at) if now >= at) {
            emit_notice(ctx, "Fighting", "NPC Hunting");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "hunting_tests.rs"]
mod tests;
