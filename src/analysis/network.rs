// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network-level checks on referenced resources

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::rules::*;
use super::{Alert, Analyzer, Finding, ModuleResult};
use crate::config::Settings;
use crate::page::PageData;

lazy_static! {
    static ref INSECURE_SCHEME: Regex = Regex::new(r"(?i)http://").unwrap();
}

/// Mixed content, external domain spread and tracking hosts
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkAnalyzer;

impl Analyzer for NetworkAnalyzer {
    fn name(&self) -> &'static str {
        "network"
    }

    fn analyze(&self, page: &PageData, _settings: &Settings) -> ModuleResult {
        let mut result = ModuleResult::default();

        if page.is_https() {
            result.record(check_mixed_content(&page.html));
        }

        let hosts = resource_hosts(&page.external_resources);
        result.record(check_external_domains(&hosts));
        result.record(check_tracking_hosts(&hosts));

        result
    }
}

/// Hosts of every parseable resource URL, in reference order.
///
/// URLs without a host (`javascript:`, `about:blank`) count as the empty host.
fn resource_hosts(resources: &[String]) -> Vec<String> {
    resources
        .iter()
        .filter_map(|resource| Url::parse(resource).ok())
        .map(|url| url.host_str().unwrap_or_default().to_string())
        .collect()
}

/// Plain `http://` references that do not point at the local machine
fn count_insecure_references(html: &str) -> usize {
    INSECURE_SCHEME
        .find_iter(html)
        .filter(|m| {
            let rest = &html[m.end()..];
            !MIXED_CONTENT_EXEMPT_HOSTS.iter().any(|host| {
                rest.get(..host.len())
                    .map_or(false, |prefix| prefix.eq_ignore_ascii_case(host))
            })
        })
        .count()
}

fn check_mixed_content(html: &str) -> Option<Finding> {
    let count = count_insecure_references(html);
    if count == 0 {
        return None;
    }

    Some(Finding::new(
        MIXED_CONTENT_SCORE,
        Alert::suspicious(
            "Mixed content detected",
            format!(
                "This secure page loads {} resources over insecure HTTP connections",
                count
            ),
        ),
    ))
}

fn check_external_domains(hosts: &[String]) -> Option<Finding> {
    let unique: HashSet<&str> = hosts.iter().map(String::as_str).collect();
    if unique.len() <= EXTERNAL_DOMAIN_THRESHOLD {
        return None;
    }

    Some(Finding::new(
        EXTERNAL_DOMAIN_SCORE,
        Alert::suspicious(
            "Excessive external resources",
            format!(
                "This page loads resources from {} different domains, which increases attack surface",
                unique.len()
            ),
        ),
    ))
}

fn check_tracking_hosts(hosts: &[String]) -> Option<Finding> {
    let mut seen = HashSet::new();
    let tracking: Vec<&str> = hosts
        .iter()
        .map(String::as_str)
        .filter(|host| TRACKING_HOST_MARKERS.iter().any(|marker| host.contains(marker)))
        .filter(|host| seen.insert(*host))
        .collect();

    if tracking.is_empty() {
        return None;
    }

    Some(Finding::new(
        TRACKING_HOST_SCORE,
        Alert::suspicious(
            "Resources from tracking domains",
            format!(
                "This page loads resources from domains commonly associated with tracking: {}",
                tracking.join(", ")
            ),
        ),
    ))
}
