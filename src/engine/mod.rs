// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Risk aggregation
//!
//! Runs every analysis module over one page, sums their scores, applies the
//! trust discount, HTTPS cap and deep scan correction, and buckets the
//! result into a risk level.

mod level;
mod result;

pub use level::{RiskLevel, ScanThreshold, HIGH_MAX, LOW_MAX, MEDIUM_MAX};
pub use result::ScanResult;

use std::sync::Arc;

use futures::future::join_all;

use crate::analysis::{default_analyzers, Alert, Analyzer, ModuleResult};
use crate::config::Settings;
use crate::page::PageData;

/// Share of the score kept for trusted domains
pub const TRUST_FACTOR: f64 = 0.15;
/// Ceiling for untrusted pages served over HTTPS
pub const HTTPS_SCORE_CAP: f64 = 85.0;
/// Deep scan correction for scores strictly between the bounds
pub const DEEP_SCAN_BAND: (f64, f64) = (50.0, 75.0);
pub const DEEP_SCAN_BAND_FACTOR: f64 = 0.95;
/// Deep scan correction for scores below this
pub const DEEP_SCAN_LOW_BELOW: f64 = 15.0;
pub const DEEP_SCAN_LOW_FACTOR: f64 = 0.9;

/// Scoring engine holding the module set
#[derive(Clone)]
pub struct RiskEngine {
    analyzers: Vec<Arc<dyn Analyzer>>,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RiskEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.analyzers.iter().map(|a| a.name()).collect();
        f.debug_struct("RiskEngine").field("analyzers", &names).finish()
    }
}

impl RiskEngine {
    /// Engine with all seven modules
    pub fn new() -> Self {
        Self {
            analyzers: default_analyzers(),
        }
    }

    /// Engine with a custom module set; alert order follows `analyzers`
    pub fn with_analyzers(analyzers: Vec<Arc<dyn Analyzer>>) -> Self {
        Self { analyzers }
    }

    /// Score a page, running modules one after another
    pub fn analyze(&self, page: &PageData, settings: &Settings) -> ScanResult {
        let modules: Vec<ModuleResult> = self
            .analyzers
            .iter()
            .map(|analyzer| run_module(analyzer.as_ref(), page, settings))
            .collect();

        aggregate(page, settings, modules)
    }

    /// Score a page with each module on the blocking pool.
    ///
    /// Produces the same result as [`RiskEngine::analyze`].
    pub async fn analyze_concurrent(
        &self,
        page: Arc<PageData>,
        settings: Arc<Settings>,
    ) -> ScanResult {
        let tasks: Vec<_> = self
            .analyzers
            .iter()
            .map(|analyzer| {
                let analyzer = Arc::clone(analyzer);
                let page = Arc::clone(&page);
                let settings = Arc::clone(&settings);
                let name = analyzer.name();

                async move {
                    tokio::task::spawn_blocking(move || {
                        run_module(analyzer.as_ref(), &page, &settings)
                    })
                    .await
                    .unwrap_or_else(|e| {
                        tracing::warn!(module = name, error = %e, "Module task failed");
                        ModuleResult::default()
                    })
                }
            })
            .collect();

        let modules = join_all(tasks).await;
        aggregate(&page, &settings, modules)
    }
}

/// Score a page with the default module set
pub fn analyze(page: &PageData, settings: &Settings) -> ScanResult {
    RiskEngine::new().analyze(page, settings)
}

fn run_module(analyzer: &dyn Analyzer, page: &PageData, settings: &Settings) -> ModuleResult {
    let result = analyzer.analyze(page, settings);
    tracing::debug!(
        module = analyzer.name(),
        score = result.score,
        alerts = result.alerts.len(),
        "Module finished"
    );
    result
}

/// Combine module results into the final verdict
fn aggregate(page: &PageData, settings: &Settings, modules: Vec<ModuleResult>) -> ScanResult {
    let mut score = 0.0;
    let mut alerts: Vec<Alert> = Vec::new();
    for module in modules {
        score += module.score;
        alerts.extend(module.alerts);
    }

    let trusted = settings.is_trusted(&page.domain);
    if trusted {
        score = (score * TRUST_FACTOR).floor().max(0.0);
        alerts.push(Alert::privacy(
            "Trusted domain detected",
            format!(
                "{} is recognized as a trusted domain with established security practices.",
                page.domain
            ),
        ));
    }

    if page.is_https() && !trusted && score > HTTPS_SCORE_CAP {
        score = HTTPS_SCORE_CAP;
    }

    if page.deep_scan {
        if score > DEEP_SCAN_BAND.0 && score < DEEP_SCAN_BAND.1 {
            score = (score * DEEP_SCAN_BAND_FACTOR).floor();
        }
        if score < DEEP_SCAN_LOW_BELOW {
            score = (score * DEEP_SCAN_LOW_FACTOR).floor();
        }
        alerts.push(Alert::info(
            "Enhanced accuracy scan completed",
            "This scan used enhanced data collection for higher accuracy results.",
        ));
    }

    // the level is bucketed from the reported integer score
    let score = score.floor().clamp(0.0, 100.0);
    let risk_level = RiskLevel::from_score(score);
    tracing::info!(
        url = %page.url,
        score,
        level = %risk_level,
        alerts = alerts.len(),
        "Scan complete"
    );

    ScanResult {
        risk_level,
        risk_score: score as u32,
        alerts,
        scan_time: ScanResult::timestamp(),
        url: page.url.clone(),
        partial_scan: page.is_reduced().then_some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AlertType;

    const LOGIN_FORM: &str = r#"<form><label>Username</label><input name="username">
<label>Password</label><input type="password" name="password"><button>Log in</button></form>"#;
    const HEAVY_SCRIPT: &str =
        "eval(atob('x')) eval(a) eval(b) eval(c) <iframe hidden></iframe><iframe hidden></iframe>";

    fn messages(result: &ScanResult) -> Vec<&str> {
        result.alerts.iter().map(|a| a.message.as_str()).collect()
    }

    #[test]
    fn test_trusted_empty_page() {
        let result = analyze(&PageData::new("https://github.com/"), &Settings::default());

        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.alerts.len(), 1);
        assert_eq!(result.alerts[0].alert_type, AlertType::Privacy);
        assert_eq!(
            result.alerts[0].details,
            "github.com is recognized as a trusted domain with established security practices."
        );
        assert_eq!(result.partial_scan, None);
    }

    #[test]
    fn test_insecure_obfuscated_page() {
        let page = PageData::new("http://insecure.example/")
            .html("eval(atob('x')) eval(b) eval(c) eval(d) document.write(e)");
        let result = analyze(&page, &Settings::default());

        // 10 domain, 15 obfuscation, 20 eval with encoded content
        assert_eq!(result.risk_score, 45);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(
            messages(&result),
            vec![
                "Insecure connection",
                "Potentially obfuscated JavaScript detected",
                "Highly suspicious JavaScript detected",
            ]
        );
    }

    #[test]
    fn test_trust_discount() {
        let page = PageData::new("https://gist.github.com/").html("eval(a) eval(b) eval(c) eval(d)");
        let result = analyze(&page, &Settings::default());

        // floor(15 * 0.15)
        assert_eq!(result.risk_score, 2);
        assert_eq!(result.alerts.last().unwrap().message, "Trusted domain detected");
    }

    #[test]
    fn test_trust_discount_monotonic() {
        let settings = Settings::default().trusted_domains(["shop.example"]);
        let raw = PageData::new("https://shop.example/").html(HEAVY_SCRIPT);

        let trusted = analyze(&raw, &settings);
        let untrusted = analyze(&raw, &Settings::default());
        assert!(trusted.risk_score <= untrusted.risk_score);
    }

    #[test]
    fn test_https_cap() {
        let page = PageData::new("https://shop.example/")
            .html(format!("{}<p>Card number</p>{}", LOGIN_FORM, HEAVY_SCRIPT))
            .text("Sign in with PayPal");
        let result = analyze(&page, &Settings::default());

        // 55 code + 40 phishing, capped
        assert_eq!(result.risk_score, 85);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_http_not_capped() {
        let page = PageData::new("http://shop.example/")
            .html(format!("{}<p>Card number</p>{}", LOGIN_FORM, HEAVY_SCRIPT))
            .text("Sign in with PayPal");
        let result = analyze(&page, &Settings::default());

        assert_eq!(result.risk_score, 100);
        assert_eq!(result.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_fractional_score_bucketed_after_floor() {
        let page = PageData::new("https://shop.example/").html(format!(
            "{}<p>Card number</p>{}",
            LOGIN_FORM,
            "<b onclick=x>".repeat(11)
        ));
        let result = analyze(&page, &Settings::default());

        // 10 login form + 15 card field + 5.5 event handlers
        assert_eq!(result.risk_score, 30);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(
            result.risk_level,
            RiskLevel::from_score(f64::from(result.risk_score))
        );
    }

    #[test]
    fn test_deep_scan_band_correction() {
        let page = PageData::new("https://deep.example/?deepScan=true").html(HEAVY_SCRIPT);
        let result = analyze(&page, &Settings::default());

        // floor(55 * 0.95)
        assert_eq!(result.risk_score, 52);
        assert_eq!(
            result.alerts.last().unwrap().message,
            "Enhanced accuracy scan completed"
        );
        assert_eq!(result.alerts.last().unwrap().alert_type, AlertType::Info);
    }

    #[test]
    fn test_deep_scan_low_correction() {
        let page = PageData::new("https://deep.example/?deepScan=true")
            .html("<b onclick=x>".repeat(11));
        let result = analyze(&page, &Settings::default());

        // floor(5.5 * 0.9)
        assert_eq!(result.risk_score, 4);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_reduced_input_marks_partial() {
        let page = PageData::essential("https://example.com/", "Example");
        let result = analyze(&page, &Settings::default());

        assert_eq!(result.partial_scan, Some(true));
        assert_eq!(result.risk_score, 0);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = analyze(&PageData::new("https://github.com/"), &Settings::default());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["riskLevel"], "low");
        assert_eq!(json["riskScore"], 0);
        assert!(json.get("scanTime").is_some());
        assert!(json.get("partialScan").is_none());
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let engine = RiskEngine::new();
        let settings = Settings::default();
        let page = PageData::new("http://shop.example/")
            .html(format!("{}<p>Card number</p>{}", LOGIN_FORM, HEAVY_SCRIPT))
            .text("Sign in with PayPal");

        let sequential = engine.analyze(&page, &settings);
        let concurrent = engine
            .analyze_concurrent(Arc::new(page), Arc::new(settings))
            .await;

        assert_eq!(sequential.risk_score, concurrent.risk_score);
        assert_eq!(sequential.alerts, concurrent.alerts);
    }
}
