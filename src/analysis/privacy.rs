// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tracking, cookie volume and fingerprinting checks

use super::rules::*;
use super::{Alert, Analyzer, Finding, ModuleResult};
use crate::config::Settings;
use crate::matchers::{count_keywords, count_regex};
use crate::page::PageData;

#[derive(Debug, Clone, Copy, Default)]
pub struct PrivacyAnalyzer;

impl Analyzer for PrivacyAnalyzer {
    fn name(&self) -> &'static str {
        "privacy"
    }

    fn analyze(&self, page: &PageData, _settings: &Settings) -> ModuleResult {
        let mut result = ModuleResult::default();

        result.record(check_tracking(&page.html));
        result.record(check_cookies(page.cookies));
        result.record(check_fingerprinting(&page.html));

        result
    }
}

/// Most sites carry some analytics; only heavy use is flagged
fn check_tracking(html: &str) -> Option<Finding> {
    let found = count_keywords(html, TRACKING_KEYWORDS);
    if found.count <= TRACKING_THRESHOLD {
        return None;
    }

    Some(Finding::new(
        TRACKING_SCORE,
        Alert::privacy(
            "Excessive tracking detected",
            format!(
                "Found {} instances of tracking technologies: {}",
                found.count,
                found.joined()
            ),
        ),
    ))
}

fn check_cookies(cookie_bytes: u32) -> Option<Finding> {
    if cookie_bytes <= COOKIE_THRESHOLD {
        return None;
    }

    Some(Finding::new(
        COOKIE_SCORE,
        Alert::privacy(
            "Excessive cookie usage",
            "This page sets a large number of cookies which may impact privacy",
        ),
    ))
}

fn check_fingerprinting(html: &str) -> Option<Finding> {
    // overlapping fragments (navigator.language / navigator.languages) each count
    let count: usize = FINGERPRINTING_PATTERNS
        .iter()
        .map(|pattern| count_regex(html, pattern))
        .sum();

    if count <= FINGERPRINTING_THRESHOLD {
        return None;
    }

    Some(Finding::new(
        FINGERPRINTING_SCORE,
        Alert::privacy(
            "Browser fingerprinting detected",
            "This page appears to use techniques to fingerprint your browser, which can track you even with cookies disabled",
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AlertType;

    fn run(page: PageData) -> ModuleResult {
        PrivacyAnalyzer.analyze(&page, &Settings::default())
    }

    fn page() -> PageData {
        PageData::new("https://tracker-heavy.example/")
    }

    #[test]
    fn test_light_analytics_not_flagged() {
        let html = "<script src='/analytics.js'></script> gtag('config')".repeat(5);
        assert!(run(page().html(html)).is_clean());
    }

    #[test]
    fn test_excessive_tracking() {
        let html = "<script>gtag('event'); fbq('track')</script>".repeat(6);
        let result = run(page().html(html));

        assert_eq!(result.score, 5.0);
        assert_eq!(result.alerts[0].alert_type, AlertType::Privacy);
        assert_eq!(
            result.alerts[0].details,
            "Found 12 instances of tracking technologies: gtag, fbq"
        );
    }

    #[test]
    fn test_cookie_threshold() {
        assert!(run(page().cookies(50)).is_clean());

        let result = run(page().cookies(51));
        assert_eq!(result.score, 5.0);
        assert_eq!(result.alerts[0].message, "Excessive cookie usage");
    }

    #[test]
    fn test_fingerprinting_counts_overlapping_fragments() {
        // navigator.languages also matches navigator.language
        let html = "navigator.languages; navigator.platform; screen.colorDepth";
        let result = run(page().html(html));

        assert_eq!(result.score, 10.0);
        assert_eq!(result.alerts[0].message, "Browser fingerprinting detected");
    }

    #[test]
    fn test_fingerprinting_is_case_sensitive() {
        let html = "NAVIGATOR.USERAGENT NAVIGATOR.PLATFORM AUDIOCONTEXT WEBGLRENDERINGCONTEXT";
        assert!(run(page().html(html)).is_clean());
    }
}
