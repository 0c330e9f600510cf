use std::sync::Arc;

use async_trait::async_trait;

use lesuite_core::MemoryCacheStore;
use lesuite_protocols::{
    DomPatch, FetchError, GameAction, GameClock, Page, PageContext, PageFetcher, PageHandler,
};

use super::*;

struct NoFetch;

#[async_trait]
impl PageFetcher for NoFetch {
    async fn fetch(&self, _path: &str) -> Result<Page, FetchError> {
        Err(FetchError::Request("unexpected fetch".to_string()))
    }

    async fn submit(&self, _action: &GameAction) -> Result<(), FetchError> {
        Ok(())
    }
}

fn context(html: &str) -> PageContext {
    PageContext::new(
        Page::new("/messages.php", html),
        Arc::new(MemoryCacheStore::new()),
        Arc::new(NoFetch),
        GameClock::default(),
    )
}

#[tokio::test]
async fn test_confirms_both_delete_paths() {
    let html = concat!(
        r#"<a href="messages4.php?id=9">Delete</a>"#,
        r##"<a href="#" onclick="submitchecks('delete');">Delete Checked</a>"##,
    );
    let ctx = context(html);
    DeleteMailConfirm.run(&ctx).await.unwrap();

    let plan = ctx.into_plan();
    assert_eq!(plan.patches.len(), 2);
    assert!(plan.patches.iter().all(|p| matches!(
        p,
        DomPatch::ConfirmClick { message, .. } if message == "Delete Mail?"
    )));
}

#[tokio::test]
async fn test_inbox_without_delete_links() {
    let ctx = context("<html>No mail.</html>");
    DeleteMailConfirm.run(&ctx).await.unwrap();
    assert!(ctx.into_plan().patches.is_empty());
}

#[tokio::test]
async fn test_only_per_message_links() {
    let ctx = context(r#"<a href="messages4.php?id=9">Delete</a>"#);
    DeleteMailConfirm.run(&ctx).await.unwrap();
    assert_eq!(ctx.into_plan().patches.len(), 1);
}
