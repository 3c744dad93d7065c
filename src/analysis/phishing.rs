// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Phishing indicators: credential forms, brand impersonation, data harvesting

use super::rules::*;
use super::{Alert, Analyzer, Finding, ModuleResult};
use crate::config::Settings;
use crate::matchers::{count_keywords, count_regex};
use crate::page::PageData;

#[derive(Debug, Clone, Copy, Default)]
pub struct PhishingAnalyzer;

impl Analyzer for PhishingAnalyzer {
    fn name(&self) -> &'static str {
        "phishing"
    }

    fn analyze(&self, page: &PageData, _settings: &Settings) -> ModuleResult {
        let html = page.html.as_str();
        let secure = page.is_https();
        let mut result = ModuleResult::default();

        let login_indicators = count_keywords(html, LOGIN_INDICATORS).count;
        let password_fields = count_regex(html, PASSWORD_FIELD_PATTERN);

        if password_fields > 0 && login_indicators > LOGIN_INDICATOR_THRESHOLD {
            result.record(Some(Finding::new(
                LOGIN_FORM_SCORE,
                Alert::suspicious(
                    "Login form detected",
                    "This page contains login forms which could potentially be used for phishing",
                ),
            )));

            if !secure {
                result.record(Some(Finding::new(
                    INSECURE_LOGIN_SCORE,
                    Alert::malicious(
                        "Insecure login form detected",
                        "This page contains a login form but does not use a secure connection (HTTPS)",
                    ),
                )));
            }
        }

        result.record(check_brand_impersonation(page, password_fields));

        let sensitive = count_keywords(html, SENSITIVE_DATA_FIELDS);
        if sensitive.count > 0 {
            result.record(Some(Finding::new(
                SENSITIVE_DATA_SCORE,
                Alert::suspicious(
                    "Sensitive data collection detected",
                    format!(
                        "This page appears to collect sensitive information: {}",
                        sensitive.joined()
                    ),
                ),
            )));

            if !secure {
                result.record(Some(Finding::new(
                    INSECURE_SENSITIVE_DATA_SCORE,
                    Alert::malicious(
                        "Insecure collection of sensitive data",
                        "This page collects sensitive information without using a secure connection (HTTPS)",
                    ),
                )));
            }
        }

        let fake_security = count_keywords(html, FAKE_SECURITY_PHRASES).count;
        if fake_security > 0 && !secure {
            result.record(Some(Finding::new(
                FAKE_SECURITY_SCORE,
                Alert::malicious(
                    "Fake security indicators",
                    "This page claims to be secure but does not use HTTPS encryption",
                ),
            )));
        }

        result
    }
}

/// Brands named in the text but not part of the hosting domain, on a page
/// that asks for a password
fn check_brand_impersonation(page: &PageData, password_fields: usize) -> Option<Finding> {
    if password_fields == 0 {
        return None;
    }

    let mentioned: Vec<&str> = COMMON_BRANDS
        .iter()
        .copied()
        .filter(|brand| !page.domain.contains(*brand))
        .filter(|brand| count_keywords(&page.text, &[*brand]).count > 0)
        .collect();

    if mentioned.is_empty() {
        return None;
    }

    Some(Finding::new(
        BRAND_IMPERSONATION_SCORE,
        Alert::malicious(
            "Potential brand impersonation detected",
            format!(
                "This page mentions {} but is not hosted on their official domain",
                mentioned.join(", ")
            ),
        ),
    ))
}
