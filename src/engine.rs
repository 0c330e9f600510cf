//! Engine assembly: config, session, cache, client, and dispatch.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use lesuite_config::{Config, ConfigLoader};
use lesuite_core::{Dispatcher, FileCacheStore, GameClient, GameHost, ScopedStore, session_hash};
use lesuite_protocols::{
    CacheStore, EnhancementPlan, GameClock, Page, PageContext, PageFetcher,
};

use crate::register::build_registry;

/// A configured engine: session-scoped cache over the shared snapshot, a
/// cookie-authenticated client, and the dispatcher with every handler
/// registered.
pub(crate) struct Engine {
    store: Arc<FileCacheStore>,
    scoped: Arc<ScopedStore>,
    client: Arc<GameClient>,
    clock: GameClock,
    dispatcher: Dispatcher,
}

impl Engine {
    pub(crate) fn from_config(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let host = GameHost::parse(&config.game.host)?;
        let hash = session_hash(host, &config.session.cookie)?;

        let cache_path = ConfigLoader::expand_path(&config.cache.path);
        let store = Arc::new(FileCacheStore::open(cache_path)?);
        let scoped = Arc::new(ScopedStore::new(
            store.clone() as Arc<dyn CacheStore>,
            hash,
        ));

        let base_url = config
            .game
            .base_url
            .clone()
            .unwrap_or_else(|| host.base_url().to_string());
        let client = Arc::new(GameClient::new(
            &base_url,
            config.session.cookie.clone(),
            Duration::from_secs(config.http.timeout_seconds),
            &config.http.user_agent,
        )?);

        let clock = GameClock::new(config.game.server_utc_offset_hours);
        let dispatcher = Dispatcher::new(build_registry()?);

        info!("Engine ready for {}", base_url);
        Ok(Self {
            store,
            scoped,
            client,
            clock,
            dispatcher,
        })
    }

    /// Fetch a live page and produce its enhancement plan.
    pub(crate) async fn run(
        &self,
        path: &str,
    ) -> Result<EnhancementPlan, Box<dyn std::error::Error>> {
        let page = self.client.fetch(path).await?;
        self.enhance(page).await
    }

    /// Plan for markup already saved to disk. The live client still backs
    /// any secondary fetches the handlers make.
    pub(crate) async fn plan_from_file(
        &self,
        path: &str,
        file: &Path,
    ) -> Result<EnhancementPlan, Box<dyn std::error::Error>> {
        let html = std::fs::read_to_string(file)?;
        self.enhance(Page::new(path, html)).await
    }

    async fn enhance(&self, page: Page) -> Result<EnhancementPlan, Box<dyn std::error::Error>> {
        let dropped = self.scoped.sweep();
        if dropped > 0 {
            debug!("swept {} expired cache entries", dropped);
        }

        let ctx = PageContext::new(
            page,
            self.scoped.clone() as Arc<dyn CacheStore>,
            self.client.clone() as Arc<dyn PageFetcher>,
            self.clock,
        );
        let cancel = CancellationToken::new();
        let report = self.dispatcher.dispatch(&ctx, &cancel).await;
        info!(
            "{} handler(s) ran, {} failed",
            report.ran.len(),
            report.failed.len()
        );
        for (id, e) in &report.failed {
            warn!("handler '{}' failed: {}", id, e);
        }

        self.store.persist()?;
        Ok(ctx.into_plan())
    }

    /// Full self-heal via the hospital page's keyed link.
    pub(crate) async fn heal(&self) -> Result<(), Box<dyn std::error::Error>> {
        let hospital = self.client.fetch("/hospital.php").await?;
        let key = lesuite_pages_general::heal::extract_hospital_key(&hospital)?;
        self.client
            .submit(&lesuite_pages_general::heal::heal_action(&key))
            .await?;
        info!("Healed to full health");
        Ok(())
    }
}
