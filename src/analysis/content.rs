// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Content quality signals: disinformation, clickbait, ad density

use super::rules::*;
use super::{Alert, Analyzer, Finding, ModuleResult};
use crate::config::Settings;
use crate::matchers::count_keywords;
use crate::page::PageData;

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentAnalyzer;

impl Analyzer for ContentAnalyzer {
    fn name(&self) -> &'static str {
        "content"
    }

    fn analyze(&self, page: &PageData, _settings: &Settings) -> ModuleResult {
        let mut result = ModuleResult::default();

        result.record(check_disinformation(&page.text));
        result.record(check_clickbait(&page.title));
        result.record(check_ads(&page.html));

        result
    }
}

fn check_disinformation(text: &str) -> Option<Finding> {
    let found = count_keywords(text, DISINFORMATION_KEYWORDS);
    if found.count == 0 {
        return None;
    }

    let score = (found.count as f64 * DISINFORMATION_PER_MATCH).min(DISINFORMATION_MAX_SCORE);
    Some(Finding::new(
        score,
        Alert::disinformation(
            "Potential disinformation keywords detected",
            format!(
                "Found {} instances of keywords commonly associated with disinformation: {}",
                found.count,
                found.joined()
            ),
        ),
    ))
}

/// Only the title is checked
fn check_clickbait(title: &str) -> Option<Finding> {
    let found = count_keywords(title, CLICKBAIT_PHRASES);
    if found.count == 0 {
        return None;
    }

    Some(Finding::new(
        CLICKBAIT_SCORE,
        Alert::suspicious(
            "Clickbait title detected",
            format!("The page title contains clickbait phrases: {}", found.joined()),
        ),
    ))
}

fn check_ads(html: &str) -> Option<Finding> {
    let found = count_keywords(html, AD_INDICATORS);
    if found.count <= AD_THRESHOLD {
        return None;
    }

    Some(Finding::new(
        AD_SCORE,
        Alert::suspicious(
            "Excessive advertisement indicators",
            format!(
                "Found {} potential ad-related elements which may indicate an ad-heavy site",
                found.count
            ),
        ),
    ))
}
