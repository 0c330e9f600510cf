//! Page fetching trait.

use async_trait::async_trait;

use crate::action::GameAction;
use crate::error::FetchError;
use crate::page::Page;

/// Fetches same-origin game pages and submits game actions.
///
/// Implemented by the HTTP client in `lesuite-core`; test code substitutes
/// canned stubs.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `path`, authenticated with the session cookie.
    async fn fetch(&self, path: &str) -> Result<Page, FetchError>;

    /// Submit a mutating action. The response body is discarded.
    async fn submit(&self, action: &GameAction) -> Result<(), FetchError>;
}
