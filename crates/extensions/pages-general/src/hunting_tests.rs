use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use lesuite_core::MemoryCacheStore;
use lesuite_protocols::{
    CacheStore, DomPatch, FetchError, GameAction, GameClock, Page, PageContext, PageFetcher,
    PageHandler,
};

use super::*;

const COUNTDOWN_HTML: &str = concat!(
    "<html><font>Special Character Hunting</font>",
    "<font>You can hunt again in 2 days, 3 hours, 5 minutes and 10 seconds.</font></html>",
);

struct HuntingFetcher {
    html: &'static str,
}

#[async_trait]
impl PageFetcher for HuntingFetcher {
    async fn fetch(&self, path: &str) -> Result<Page, FetchError> {
        Ok(Page::new(path, self.html))
    }

    async fn submit(&self, _action: &GameAction) -> Result<(), FetchError> {
        Ok(())
    }
}

fn context(path: &str, html: &str, cache: Arc<MemoryCacheStore>, hunting: &'static str) -> PageContext {
    PageContext::new(
        Page::new(path, html),
        cache,
        Arc::new(HuntingFetcher { html: hunting }),
        GameClock::default(),
    )
}

#[test]
fn test_parse_countdown_components() {
    let page = Page::new("/hunting.php", COUNTDOWN_HTML);
    let wait = parse_special_hunt_wait(&page).unwrap();
    assert_eq!(wait, 2 * 86_400 + 3 * 3_600 + 5 * 60 + 10);
}

#[test]
fn test_parse_missing_components_count_as_zero() {
    let page = Page::new(
        "/hunting.php",
        concat!(
            "<html><font>Special Character Hunting</font>",
            "<font>You can hunt again in 45 minutes.</font></html>",
        ),
    );
    assert_eq!(parse_special_hunt_wait(&page), Some(45 * 60));
}

#[test]
fn test_parse_without_capability_section() {
    let page = Page::new("/hunting.php", "<html>Go Hunting</html>");
    assert_eq!(parse_special_hunt_wait(&page), None);
}

#[test]
fn test_parse_capable_without_countdown_is_ready() {
    let page = Page::new(
        "/hunting.php",
        "<html><font>Special Character Hunting</font></html>",
    );
    assert_eq!(parse_special_hunt_wait(&page), Some(0));
}

#[test]
fn test_parse_ignores_numbers_outside_countdown() {
    let page = Page::new(
        "/hunting.php",
        concat!(
            "<html><font>Special Character Hunting</font>",
            "You have hunted 90 days in a row!",
            "<font>You can hunt again in 5 minutes.</font></html>",
        ),
    );
    assert_eq!(parse_special_hunt_wait(&page), Some(5 * 60));
}

#[tokio::test]
async fn test_notice_when_cached_time_has_passed() {
    let cache = Arc::new(MemoryCacheStore::new());
    cache.set(SPECIAL_HUNT_CACHE_KEY, json!(1_000), Duration::from_secs(600));

    let ctx = context("/explore.php", "<html></html>", cache, COUNTDOWN_HTML);
    SpecialHuntNotice.run(&ctx).await.unwrap();

    // One icon after the Fighting tab, one inside the hunting link.
    let plan = ctx.into_plan();
    assert!(plan.patches.iter().any(|p| matches!(
        p,
        DomPatch::InsertAfter { anchor, .. } if anchor == r#"img[alt="Fighting"]"#
    )));
    assert!(plan.patches.iter().any(|p| matches!(
        p,
        DomPatch::AppendInto { target, .. } if target.contains("NPC Hunting")
    )));
}

#[tokio::test]
async fn test_no_notice_while_cooldown_runs() {
    let cache = Arc::new(MemoryCacheStore::new());
    cache.set(
        SPECIAL_HUNT_CACHE_KEY,
        json!(i64::MAX / 2),
        Duration::from_secs(600),
    );

    let ctx = context("/explore.php", "<html></html>", cache, COUNTDOWN_HTML);
    SpecialHuntNotice.run(&ctx).await.unwrap();

    assert!(ctx.into_plan().patches.is_empty());
}

#[tokio::test]
async fn test_hunting_page_overwrites_stale_cache() {
    let cache = Arc::new(MemoryCacheStore::new());
    // Stale entry claiming the hunt is ready.
    cache.set(SPECIAL_HUNT_CACHE_KEY, json!(1_000), Duration::from_secs(600));

    let ctx = context("/hunting.php", COUNTDOWN_HTML, cache.clone(), COUNTDOWN_HTML);
    SpecialHuntNotice.run(&ctx).await.unwrap();

    // The page itself says two more days, so no notice and a refreshed entry.
    assert!(ctx.into_plan().patches.is_empty());
    let refreshed = cache.get(SPECIAL_HUNT_CACHE_KEY).unwrap();
    assert!(refreshed.as_i64().unwrap() > 1_000);
}

#[tokio::test]
async fn test_miss_fetches_hunting_page() {
    let cache = Arc::new(MemoryCacheStore::new());
    let ctx = context(
        "/explore.php",
        "<html></html>",
        cache.clone(),
        "<html><font>Special Character Hunting</font><font>You can hunt again right now.</font></html>",
    );
    SpecialHuntNotice.run(&ctx).await.unwrap();

    // No countdown components on the fetched page, so the hunt is ready.
    assert!(!ctx.into_plan().patches.is_empty());
    assert!(cache.get(SPECIAL_HUNT_CACHE_KEY).is_some());
}
