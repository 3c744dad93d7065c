// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! End-to-end page scanning
//!
//! Ties a page source to the engine and the stores: blocklist check, cache
//! lookup, fetch with timeout and reduced-data fallback, scoring, storage and
//! the notification decision.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::config::{Settings, SettingsStore};
use crate::engine::{RiskEngine, ScanResult};
use crate::error::{Error, Result};
use crate::page::{PageData, PageSource};
use crate::report::should_notify;
use crate::store::{BlockList, ResultStore, ScanCache};

/// Scan timeouts
#[derive(Debug, Clone)]
pub struct ScanServiceConfig {
    /// Time allowed for a regular fetch
    pub scan_timeout: Duration,
    /// Time allowed when the URL requests a deep scan
    pub deep_scan_timeout: Duration,
}

impl Default for ScanServiceConfig {
    fn default() -> Self {
        Self {
            scan_timeout: Duration::from_secs(25),
            deep_scan_timeout: Duration::from_secs(30),
        }
    }
}

impl ScanServiceConfig {
    /// Timeout that applies to `url`
    pub fn timeout_for(&self, url: &str) -> Duration {
        if PageData::is_deep_scan_url(url) {
            self.deep_scan_timeout
        } else {
            self.scan_timeout
        }
    }
}

/// What a scan request ended in
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Hostname is on the blocklist; nothing was fetched
    Blocked { domain: String },
    /// A fresh cached verdict was reused
    Cached { result: ScanResult, notify: bool },
    /// The page was scored
    Completed { result: ScanResult, notify: bool },
}

impl ScanOutcome {
    pub fn result(&self) -> Option<&ScanResult> {
        match self {
            ScanOutcome::Blocked { .. } => None,
            ScanOutcome::Cached { result, .. } | ScanOutcome::Completed { result, .. } => Some(result),
        }
    }

    pub fn should_notify(&self) -> bool {
        match self {
            ScanOutcome::Blocked { .. } => false,
            ScanOutcome::Cached { notify, .. } | ScanOutcome::Completed { notify, .. } => *notify,
        }
    }
}

/// Page scanning service
pub struct ScanService {
    source: Arc<dyn PageSource>,
    engine: RiskEngine,
    settings: Arc<SettingsStore>,
    cache: ScanCache,
    results: Arc<ResultStore>,
    blocklist: Arc<BlockList>,
    config: ScanServiceConfig,
}

impl ScanService {
    /// Service with default settings and in-memory stores
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            engine: RiskEngine::new(),
            settings: Arc::new(SettingsStore::in_memory(Settings::default())),
            cache: ScanCache::new(),
            results: Arc::new(ResultStore::in_memory()),
            blocklist: Arc::new(BlockList::in_memory()),
            config: ScanServiceConfig::default(),
        }
    }

    pub fn settings(mut self, settings: Arc<SettingsStore>) -> Self {
        self.settings = settings;
        self
    }

    pub fn results(mut self, results: Arc<ResultStore>) -> Self {
        self.results = results;
        self
    }

    pub fn blocklist(mut self, blocklist: Arc<BlockList>) -> Self {
        self.blocklist = blocklist;
        self
    }

    pub fn engine(mut self, engine: RiskEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(mut self, config: ScanServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn settings_store(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn result_store(&self) -> &ResultStore {
        &self.results
    }

    pub fn block_list(&self) -> &BlockList {
        &self.blocklist
    }

    pub fn cache(&self) -> &ScanCache {
        &self.cache
    }

    /// Scan the page at `url`
    pub async fn scan(&self, url: &str) -> Result<ScanOutcome> {
        let parsed = Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::UnsupportedUrl(url.to_string()));
        }

        let domain = parsed.host_str().unwrap_or_default().to_string();
        if self.blocklist.is_blocked(&domain) {
            tracing::info!(url, domain = %domain, "Skipping blocked domain");
            return Ok(ScanOutcome::Blocked { domain });
        }

        let settings = self.settings.get();
        let expiry = Duration::from_millis(settings.cache_expiry_ms);
        if let Some(result) = self.cache.get(url, expiry) {
            tracing::debug!(url, "Using cached result");
            let notify = should_notify(&result, &settings);
            return Ok(ScanOutcome::Cached { result, notify });
        }

        let page = self.fetch_page(url).await?;
        let (result, notify) = self.score(url, page, settings).await;
        Ok(ScanOutcome::Completed { result, notify })
    }

    /// Score page data that was obtained elsewhere, with caching and storage
    pub async fn scan_page(&self, page: PageData) -> ScanOutcome {
        let url = page.url.clone();
        let (result, notify) = self.score(&url, page, self.settings.get()).await;
        ScanOutcome::Completed { result, notify }
    }

    /// Full fetch, falling back to essential data on timeout or fetch failure
    async fn fetch_page(&self, url: &str) -> Result<PageData> {
        let timeout = self.config.timeout_for(url);

        let failure = match tokio::time::timeout(timeout, self.source.fetch(url)).await {
            Ok(Ok(page)) => return Ok(page),
            Ok(Err(e)) if e.is_recoverable() => e,
            Ok(Err(e)) => return Err(e),
            Err(_) => Error::timeout_with_url("page fetch", timeout.as_millis() as u64, url),
        };

        tracing::warn!(url, error = %failure, "Full extraction failed, using limited data");
        self.source.essential(url).await
    }

    async fn score(&self, url: &str, page: PageData, settings: Settings) -> (ScanResult, bool) {
        let settings = Arc::new(settings);
        let result = self
            .engine
            .analyze_concurrent(Arc::new(page), Arc::clone(&settings))
            .await;

        self.cache.insert(url, result.clone());
        if let Err(e) = self.results.store(url, &result, &settings) {
            tracing::warn!(url, error = %e, "Failed to store scan result");
        }

        let notify = should_notify(&result, &settings);
        (result, notify)
    }
}
