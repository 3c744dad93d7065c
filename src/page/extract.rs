// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Regex-based extraction of `PageData` from raw markup
//!
//! Mirrors what the in-page content script collects, including its size caps.
//! This is a tag scanner, not a DOM: good enough for counting and URL
//! collection, not for rendering.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::data::{MetaTag, PageData};

/// Visible text cap (chars)
pub const MAX_TEXT_CHARS: usize = 150_000;
/// Raw markup cap (chars)
pub const MAX_HTML_CHARS: usize = 300_000;
pub const MAX_LINKS: usize = 1_500;
pub const MAX_SCRIPTS: usize = 750;
pub const MAX_META_TAGS: usize = 100;
pub const MAX_SCRIPT_RESOURCES: usize = 200;
pub const MAX_STYLESHEET_RESOURCES: usize = 100;
pub const MAX_IMAGE_RESOURCES: usize = 300;
pub const MAX_BUTTONS: usize = 100;
pub const MAX_HEADERS: usize = 100;

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap();
    static ref IFRAME_RE: Regex = Regex::new(r"(?i)<iframe\b").unwrap();
    static ref INPUT_RE: Regex = Regex::new(r"(?i)<input\b").unwrap();
    static ref FORM_RE: Regex = Regex::new(r"(?i)<form\b").unwrap();
    static ref ANCHOR_RE: Regex = Regex::new(r"(?is)<a\b[^>]*>").unwrap();
    static ref SCRIPT_TAG_RE: Regex = Regex::new(r"(?is)<script\b[^>]*>").unwrap();
    static ref LINK_TAG_RE: Regex = Regex::new(r"(?is)<link\b[^>]*>").unwrap();
    static ref IMG_TAG_RE: Regex = Regex::new(r"(?is)<img\b[^>]*>").unwrap();
    static ref META_TAG_RE: Regex = Regex::new(r"(?is)<meta\b[^>]*>").unwrap();
    static ref BUTTON_RE: Regex = Regex::new(r"(?is)<button\b[^>]*>(.*?)</button>").unwrap();
    static ref HEADING_RE: Regex = Regex::new(r"(?is)<h[1-3]\b[^>]*>(.*?)</h[1-3]>").unwrap();
    static ref NON_VISIBLE_RE: Regex =
        Regex::new(r"(?is)<script\b[^>]*>.*?</script>|<style\b[^>]*>.*?</style>|<noscript\b[^>]*>.*?</noscript>|<!--.*?-->")
            .unwrap();
    static ref TAG_RE: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref ATTR_RE: Regex =
        Regex::new(r#"(?is)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap();
}

/// Build page data from a document and the URL it was served from
pub fn extract_page_data(html: &str, page_url: &str) -> PageData {
    let base = Url::parse(page_url).ok();
    let resolve = |raw: &str| resolve_url(base.as_ref(), raw);

    let title = TITLE_RE
        .captures(html)
        .map(|c| clean_text(&c[1]))
        .unwrap_or_default();

    let links: Vec<String> = ANCHOR_RE
        .find_iter(html)
        .filter_map(|m| attr(m.as_str(), "href"))
        .take(MAX_LINKS)
        .map(|href| resolve(&href))
        .collect();

    let script_srcs: Vec<String> = SCRIPT_TAG_RE
        .find_iter(html)
        .filter_map(|m| attr(m.as_str(), "src"))
        .filter(|src| !src.is_empty())
        .map(|src| resolve(&src))
        .collect();

    let stylesheets = LINK_TAG_RE.find_iter(html).filter_map(|m| {
        let tag = m.as_str();
        let rel = attr(tag, "rel")?;
        if !rel.eq_ignore_ascii_case("stylesheet") {
            return None;
        }
        attr(tag, "href").map(|href| resolve(&href))
    });

    let images = IMG_TAG_RE
        .find_iter(html)
        .filter_map(|m| attr(m.as_str(), "src"))
        .map(|src| resolve(&src));

    let external_resources: Vec<String> = script_srcs
        .iter()
        .take(MAX_SCRIPT_RESOURCES)
        .cloned()
        .chain(stylesheets.take(MAX_STYLESHEET_RESOURCES))
        .chain(images.take(MAX_IMAGE_RESOURCES))
        .filter(|u| !u.is_empty() && !u.starts_with("data:"))
        .collect();

    let meta_tags = META_TAG_RE
        .find_iter(html)
        .take(MAX_META_TAGS)
        .map(|m| MetaTag {
            name: attr(m.as_str(), "name"),
            content: attr(m.as_str(), "content"),
        })
        .collect();

    let button_text = BUTTON_RE
        .captures_iter(html)
        .take(MAX_BUTTONS)
        .map(|c| clean_text(&c[1]))
        .collect();

    let headers = HEADING_RE
        .captures_iter(html)
        .take(MAX_HEADERS)
        .map(|c| clean_text(&c[1]))
        .collect();

    let mut page = PageData::new(page_url);
    page.title = title;
    page.text = truncate_chars(&visible_text(html), MAX_TEXT_CHARS);
    page.html = truncate_chars(html, MAX_HTML_CHARS);
    page.iframes = count_u32(IFRAME_RE.find_iter(html).count());
    page.input_fields = count_u32(INPUT_RE.find_iter(html).count());
    page.forms = count_u32(FORM_RE.find_iter(html).count());
    page.links = links;
    page.scripts = script_srcs.into_iter().take(MAX_SCRIPTS).collect();
    page.external_resources = external_resources;
    page.meta_tags = meta_tags;
    page.button_text = button_text;
    page.headers = headers;

    tracing::debug!(
        url = page_url,
        links = page.links.len(),
        resources = page.external_resources.len(),
        "Extracted page data"
    );

    page
}

/// Text a reader would see: scripts, styles and comments dropped, tags removed
pub fn visible_text(html: &str) -> String {
    let stripped = NON_VISIBLE_RE.replace_all(html, " ");
    clean_text(&stripped)
}

/// First value of attribute `name` in a single tag
fn attr(tag: &str, name: &str) -> Option<String> {
    ATTR_RE.captures_iter(tag).find_map(|c| {
        if !c[1].eq_ignore_ascii_case(name) {
            return None;
        }
        c.get(2)
            .or_else(|| c.get(3))
            .or_else(|| c.get(4))
            .map(|v| decode_entities(v.as_str().trim()))
    })
}

fn resolve_url(base: Option<&Url>, raw: &str) -> String {
    match base {
        Some(base) => base
            .join(raw)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => raw.to_string(),
    }
}

fn clean_text(fragment: &str) -> String {
    let no_tags = TAG_RE.replace_all(fragment, " ");
    let decoded = decode_entities(&no_tags);
    WHITESPACE_RE.replace_all(&decoded, " ").trim().to_string()
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Account &amp; Billing</title>
  <meta name="description" content="Manage your account">
  <link rel="stylesheet" href="/css/site.css">
  <link rel="icon" href="/favicon.ico">
  <script src="https://cdn.example.net/app.js"></script>
  <script>var inline = 1;</script>
  <style>.hidden { display: none }</style>
</head>
<body>
  <h1>Sign in</h1>
  <form action="/login"><input type="text" name="user"><input type="password" name="pw"></form>
  <a href="/help">Help</a>
  <a href='https://other.example.org/'>Other</a>
  <img src="data:image/png;base64,AAAA">
  <img src="/img/logo.png">
  <iframe src="/frame"></iframe>
  <button type="submit"><span>Verify now</span></button>
</body>
</html>"#;

    #[test]
    fn test_extract_counts_and_title() {
        let page = extract_page_data(DOC, "https://login.example.com/account");

        assert_eq!(page.domain, "login.example.com");
        assert_eq!(page.title, "Account & Billing");
        assert_eq!(page.iframes, 1);
        assert_eq!(page.input_fields, 2);
        assert_eq!(page.forms, 1);
        assert_eq!(page.button_text, vec!["Verify now".to_string()]);
        assert_eq!(page.headers, vec!["Sign in".to_string()]);
        assert_eq!(page.meta_tags[0].name.as_deref(), Some("description"));
    }

    #[test]
    fn test_extract_resolves_urls_and_skips_data_uris() {
        let page = extract_page_data(DOC, "https://login.example.com/account");

        assert_eq!(
            page.links,
            vec![
                "https://login.example.com/help".to_string(),
                "https://other.example.org/".to_string(),
            ]
        );
        assert_eq!(page.scripts, vec!["https://cdn.example.net/app.js".to_string()]);
        assert_eq!(
            page.external_resources,
            vec![
                "https://cdn.example.net/app.js".to_string(),
                "https://login.example.com/css/site.css".to_string(),
                "https://login.example.com/img/logo.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_visible_text_drops_scripts() {
        let page = extract_page_data(DOC, "https://login.example.com/");

        assert!(page.text.contains("Sign in"));
        assert!(page.text.contains("Verify now"));
        assert!(!page.text.contains("inline"));
        assert!(!page.text.contains("display"));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
