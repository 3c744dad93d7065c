// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page sources: where `PageData` comes from

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::SET_COOKIE;
use reqwest::redirect::Policy;
use reqwest::Client;

use super::data::PageData;
use super::extract::extract_page_data;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};

/// Produces page data for a URL.
///
/// Implementations are best-effort: a failed `fetch` lets the caller fall
/// back to `essential`, which must be cheap.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Full extraction
    async fn fetch(&self, url: &str) -> Result<PageData>;

    /// Reduced-fidelity data for when `fetch` fails or times out
    async fn essential(&self, url: &str) -> Result<PageData> {
        Ok(PageData::essential(url, ""))
    }
}

/// HTTP page source configuration
#[derive(Debug, Clone)]
pub struct HttpPageSourceConfig {
    /// User agent string
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
}

impl Default for HttpPageSourceConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(20),
            max_redirects: 10,
        }
    }
}

/// Fetches pages over HTTP and extracts them
#[derive(Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Create with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpPageSourceConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: HttpPageSourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<PageData> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::fetch_failed(
                url,
                Some(status.as_u16()),
                status.canonical_reason().unwrap_or("unexpected status"),
            ));
        }

        let final_url = response.url().to_string();

        // what document.cookie would expose: name=value pairs only
        let cookie_string = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("; ");

        let body = response.text().await?;

        let mut page = extract_page_data(&body, &final_url);
        page.cookies = u32::try_from(cookie_string.len()).unwrap_or(u32::MAX);
        // deep scan is requested on the URL the caller asked for
        page.deep_scan = PageData::is_deep_scan_url(url);

        tracing::debug!(url, final_url = %final_url, bytes = body.len(), "Fetched page");
        Ok(page)
    }
}

/// Serves preset documents, for tests and offline scans
#[derive(Debug, Clone, Default)]
pub struct StaticPageSource {
    pages: HashMap<String, String>,
    delay: Option<Duration>,
}

impl StaticPageSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document for `url`
    pub fn page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    /// Delay every fetch, to exercise timeouts
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PageSource for StaticPageSource {
    async fn fetch(&self, url: &str) -> Result<PageData> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.pages
            .get(url)
            .map(|html| extract_page_data(html, url))
            .ok_or_else(|| Error::fetch_failed(url, Some(404), "Not Found"))
    }

    async fn essential(&self, url: &str) -> Result<PageData> {
        let title = self
            .pages
            .get(url)
            .map(|html| extract_page_data(html, url).title)
            .unwrap_or_default();
        Ok(PageData::essential(url, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_http_fetch_extracts_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc123; Path=/; HttpOnly")
                    .set_body_string(
                        r#"<html><head><title>Login</title></head><body><input type="password"></body></html>"#,
                    ),
            )
            .mount(&server)
            .await;

        let source = HttpPageSource::new().unwrap();
        let url = format!("{}/login", server.uri());
        let page = source.fetch(&url).await.unwrap();

        assert_eq!(page.title, "Login");
        assert_eq!(page.input_fields, 1);
        assert_eq!(page.domain, "127.0.0.1");
        assert_eq!(page.cookies, "session=abc123".len() as u32);
    }

    #[tokio::test]
    async fn test_http_fetch_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = HttpPageSource::new().unwrap();
        let err = source.fetch(&server.uri()).await.unwrap_err();

        assert_eq!(err.status_code(), Some(500));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_default_essential() {
        struct Unreachable;

        #[async_trait]
        impl PageSource for Unreachable {
            async fn fetch(&self, url: &str) -> Result<PageData> {
                Err(Error::fetch_failed(url, None, "unreachable"))
            }
        }

        assert!(tokio_test::block_on(Unreachable.fetch("https://example.com/")).is_err());

        let page = tokio_test::block_on(Unreachable.essential("https://example.com/")).unwrap();
        assert!(page.limited);
        assert!(page.title.is_empty());
        assert_eq!(page.domain, "example.com");
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticPageSource::new()
            .page("https://example.com/", "<title>Example</title><p>Hello</p>");

        let page = source.fetch("https://example.com/").await.unwrap();
        assert_eq!(page.title, "Example");

        assert!(source.fetch("https://missing.example/").await.is_err());

        let essential = source.essential("https://example.com/").await.unwrap();
        assert!(essential.limited);
        assert_eq!(essential.text, "Example");
    }
}
