//! Cookie-authenticated HTTP client for the game.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::debug;
use url::Url;

use lesuite_protocols::{FetchError, GameAction, Page, PageFetcher};

/// Same-origin page fetches and action submissions.
///
/// No retries and no special redirect handling: a failed fetch simply means
/// the derived value stays uncomputed until the next run.
pub struct GameClient {
    http: reqwest::Client,
    base_url: Url,
    cookie: String,
}

impl GameClient {
    pub fn new(
        base_url: &str,
        cookie: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            cookie: cookie.into(),
        })
    }

    fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl PageFetcher for GameClient {
    async fn fetch(&self, path: &str) -> Result<Page, FetchError> {
        let url = self.url_for(path)?;
        debug!("fetching {}", url);

        let response = self
            .http
            .get(url)
            .header(header::COOKIE, &self.cookie)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;
        Ok(Page::new(path, body))
    }

    async fn submit(&self, action: &GameAction) -> Result<(), FetchError> {
        let mut url = self.url_for(&action.path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &action.query {
                pairs.append_pair(key, value);
            }
        }
        debug!("submitting action {}", url);

        let response = self
            .http
            .get(url)
            .header(header::COOKIE, &self.cookie)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                path: action.path.clone(),
            });
        }
        // Fire-and-forget: the body is not interpreted.
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
