// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Domain reputation checks

use super::rules::*;
use super::{Alert, Analyzer, Finding, ModuleResult};
use crate::config::Settings;
use crate::matchers::{is_simulated_new_domain, similarity};
use crate::page::PageData;

/// Typosquatting, suspicious TLD, domain age and transport checks.
///
/// Trusted domains short-circuit to an empty result.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainAnalyzer;

impl Analyzer for DomainAnalyzer {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn analyze(&self, page: &PageData, settings: &Settings) -> ModuleResult {
        let mut result = ModuleResult::default();
        let domain = page.domain.as_str();

        if settings.is_trusted(domain) {
            return result;
        }

        result.record(check_typosquatting(domain));
        result.record(check_tld(domain));
        result.record(check_domain_age(domain));
        result.record(check_transport(&page.url));

        result
    }
}

/// First popular domain the page imitates, if any
fn check_typosquatting(domain: &str) -> Option<Finding> {
    let target = POPULAR_DOMAINS.iter().find(|popular| {
        let score = similarity(domain, popular);
        score > TYPOSQUAT_MIN_SIMILARITY
            && score < TYPOSQUAT_MAX_SIMILARITY
            && !domain.contains(*popular)
    })?;

    Some(Finding::new(
        TYPOSQUAT_SCORE,
        Alert::malicious(
            "Potential typosquatting detected",
            format!(
                "Domain \"{}\" is very similar to \"{}\" which may indicate a phishing attempt",
                domain, target
            ),
        ),
    ))
}

fn check_tld(domain: &str) -> Option<Finding> {
    if !SUSPICIOUS_TLDS.iter().any(|tld| domain.ends_with(tld)) {
        return None;
    }

    Some(Finding::new(
        SUSPICIOUS_TLD_SCORE,
        Alert::suspicious(
            "Suspicious top-level domain",
            format!(
                "Domain uses a TLD commonly associated with malicious sites: {}",
                domain
            ),
        ),
    ))
}

fn check_domain_age(domain: &str) -> Option<Finding> {
    if !is_simulated_new_domain(domain) {
        return None;
    }

    Some(Finding::new(
        NEW_DOMAIN_SCORE,
        Alert::suspicious(
            "Recently registered domain",
            "This domain appears to be newly registered, which can be a risk factor",
        ),
    ))
}

fn check_transport(url: &str) -> Option<Finding> {
    if !url.starts_with("http:") {
        return None;
    }

    Some(Finding::new(
        INSECURE_CONNECTION_SCORE,
        Alert::suspicious(
            "Insecure connection",
            "This site does not use HTTPS encryption, making it vulnerable to data interception",
        ),
    ))
}
