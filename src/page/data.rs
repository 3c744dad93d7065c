// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Flat page record consumed by the scoring engine

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::Url;

/// `<meta>` tag name/content pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: Option<String>,
    pub content: Option<String>,
}

/// Everything the analysis modules look at for one page.
///
/// Field names follow the extension's camelCase JSON. Missing or mistyped
/// fields deserialize to their empty value instead of failing, so a partial
/// extraction still produces a scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageData {
    /// Full page URL
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    /// Hostname only
    #[serde(deserialize_with = "lenient")]
    pub domain: String,
    /// Document title
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    /// Raw markup, already length-capped by the extractor
    #[serde(deserialize_with = "lenient")]
    pub html: String,
    /// Visible text, already length-capped by the extractor
    #[serde(deserialize_with = "lenient")]
    pub text: String,
    #[serde(deserialize_with = "lenient")]
    pub iframes: u32,
    /// Byte length of the cookie string
    #[serde(deserialize_with = "lenient")]
    pub cookies: u32,
    #[serde(deserialize_with = "lenient")]
    pub input_fields: u32,
    #[serde(deserialize_with = "lenient")]
    pub forms: u32,
    #[serde(deserialize_with = "lenient")]
    pub links: Vec<String>,
    /// Script src URLs
    #[serde(deserialize_with = "lenient")]
    pub scripts: Vec<String>,
    /// Script, stylesheet and image URLs, `data:` URIs excluded
    #[serde(deserialize_with = "lenient")]
    pub external_resources: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub button_text: Vec<String>,
    /// h1-h3 text
    #[serde(deserialize_with = "lenient")]
    pub headers: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub meta_tags: Vec<MetaTag>,
    #[serde(deserialize_with = "lenient")]
    pub deep_scan: bool,
    /// Extraction did not finish; backup data was used
    #[serde(deserialize_with = "lenient")]
    pub partial: bool,
    /// Extraction timed out; only essential data is present
    #[serde(deserialize_with = "lenient")]
    pub limited: bool,
}

/// Deserialize a field, falling back to its default on type mismatch
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl PageData {
    /// Create page data for `url`, deriving the domain
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            domain: Self::domain_from_url(&url).unwrap_or_default(),
            deep_scan: Self::is_deep_scan_url(&url),
            url,
            ..Default::default()
        }
    }

    /// Reduced-fidelity record used when full extraction fails.
    ///
    /// The title doubles as the page text so text-based checks still see
    /// something.
    pub fn essential(url: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            text: title.clone(),
            title,
            limited: true,
            ..Self::new(url)
        }
    }

    /// Hostname of `url`, if it parses
    pub fn domain_from_url(url: &str) -> Option<String> {
        Url::parse(url).ok()?.host_str().map(str::to_string)
    }

    /// Deep scans are requested through a `deepScan=true` URL marker
    pub fn is_deep_scan_url(url: &str) -> bool {
        url.contains("deepScan=true")
    }

    /// Page was served over TLS
    pub fn is_https(&self) -> bool {
        self.url.starts_with("https://")
    }

    /// Extraction was cut short
    pub fn is_reduced(&self) -> bool {
        self.partial || self.limited
    }

    /// Set domain
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set raw markup
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    /// Set visible text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set iframe count
    pub fn iframes(mut self, count: u32) -> Self {
        self.iframes = count;
        self
    }

    /// Set cookie string length
    pub fn cookies(mut self, bytes: u32) -> Self {
        self.cookies = bytes;
        self
    }

    /// Set external resource URLs
    pub fn external_resources<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external_resources = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Set button labels
    pub fn button_text<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.button_text = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Mark as deep scan
    pub fn deep_scan(mut self, deep: bool) -> Self {
        self.deep_scan = deep;
        self
    }
}
