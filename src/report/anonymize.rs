// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Redaction of stored scan results

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::analysis::Alert;
use crate::engine::ScanResult;
use crate::matchers::hash_hex;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    static ref IPV4: Regex = Regex::new(
        r"(?-u:\b)[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}(?-u:\b)"
    )
    .unwrap();
    static ref URL_LIKE: Regex = Regex::new(
        r"(?i)(https?://)?([a-zA-Z0-9][-a-zA-Z0-9]*\.)+[a-zA-Z0-9][-a-zA-Z0-9]*(/[^\s]*)?"
    )
    .unwrap();
}

/// A scan result safe to persist: alert details are scrubbed and the URL is
/// also carried as a short hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymizedResult {
    #[serde(flatten)]
    pub result: ScanResult,
    /// Always true; marks the record as redacted
    pub anonymized: bool,
    pub url_hash: String,
}

/// Redact a scan result for storage.
///
/// Alert type and message are kept; details lose emails, IPv4 addresses and
/// URLs (reduced to their hostname).
pub fn anonymize(url: &str, result: &ScanResult) -> AnonymizedResult {
    let mut redacted = result.clone();
    redacted.alerts = result
        .alerts
        .iter()
        .map(|alert| Alert {
            details: sanitize_text(&alert.details),
            ..alert.clone()
        })
        .collect();

    AnonymizedResult {
        result: redacted,
        anonymized: true,
        url_hash: hash_hex(url),
    }
}

/// Strip identifiers from free text: emails, then IPs, then URLs
pub fn sanitize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = EMAIL.replace_all(text, "[EMAIL]");
    let text = IPV4.replace_all(&text, "[IP_ADDRESS]");
    let text = URL_LIKE.replace_all(&text, |caps: &Captures| url_placeholder(&caps[0]));
    text.into_owned()
}

fn url_placeholder(matched: &str) -> String {
    let candidate = if matched.to_ascii_lowercase().starts_with("http") {
        matched.to_string()
    } else {
        format!("https://{}", matched)
    };

    match Url::parse(&candidate).ok().and_then(|u| u.host_str().map(str::to_string)) {
        Some(host) => format!("[URL:{}]", host),
        None => "[URL]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RiskLevel;

    fn result(details: &str) -> ScanResult {
        ScanResult {
            risk_level: RiskLevel::Medium,
            risk_score: 40,
            alerts: vec![Alert::suspicious("Mixed content detected", details)],
            scan_time: "1/1/2026, 9:00:00 AM".to_string(),
            url: "https://example.com/page".to_string(),
            partial_scan: None,
        }
    }

    #[test]
    fn test_email_redacted() {
        assert_eq!(sanitize_text("Contact a@b.com"), "Contact [EMAIL]");
    }

    #[test]
    fn test_redaction_order() {
        let text = "Contact admin@example.com from 192.168.1.10 via https://evil.example/login?x=1 now";
        assert_eq!(
            sanitize_text(text),
            "Contact [EMAIL] from [IP_ADDRESS] via [URL:evil.example] now"
        );
    }

    #[test]
    fn test_ipv4_ascii_only() {
        assert_eq!(sanitize_text("服务器10.0.0.1离线"), "服务器[IP_ADDRESS]离线");
        // full-width digits are not an address
        assert_eq!(sanitize_text("１２.３.４.５"), "１２.３.４.５");
    }

    #[test]
    fn test_bare_hosts_keep_hostname() {
        assert_eq!(
            sanitize_text("tracking: stats.example.net, ads.example.org"),
            "tracking: [URL:stats.example.net], [URL:ads.example.org]"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "Found 4 instances of suspicious JavaScript patterns";
        assert_eq!(sanitize_text(text), text);
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn test_anonymize_result() {
        let original = result("Loads http://cdn.example.net/a.js");
        let anonymized = anonymize(&original.url, &original);

        assert!(anonymized.anonymized);
        assert_eq!(anonymized.url_hash, "4f4aff30");
        assert_eq!(anonymized.result.alerts[0].message, "Mixed content detected");
        assert_eq!(anonymized.result.alerts[0].details, "Loads [URL:cdn.example.net]");
        assert_eq!(anonymized.result.risk_score, original.risk_score);
    }

    #[test]
    fn test_anonymized_json_shape() {
        let original = result("none");
        let json = serde_json::to_value(anonymize(&original.url, &original)).unwrap();

        assert_eq!(json["anonymized"], true);
        assert_eq!(json["urlHash"], "4f4aff30");
        assert_eq!(json["riskLevel"], "medium");
    }
}
