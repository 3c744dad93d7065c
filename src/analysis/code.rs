// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Malicious code indicators in page markup
//!
//! Pattern counting only; nothing is executed or parsed as JavaScript.

use super::rules::*;
use super::{Alert, Analyzer, Finding, ModuleResult};
use crate::config::Settings;
use crate::matchers::{count_patterns, count_regex};
use crate::page::PageData;

/// Obfuscation, iframe, event handler, redirect and eval checks.
///
/// Checks run in a fixed order: the hidden iframe check reads the score
/// accumulated by the checks before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaliciousCodeAnalyzer;

impl Analyzer for MaliciousCodeAnalyzer {
    fn name(&self) -> &'static str {
        "malicious_code"
    }

    fn analyze(&self, page: &PageData, settings: &Settings) -> ModuleResult {
        let html = page.html.as_str();
        let mut result = ModuleResult::default();

        result.record(check_obfuscation(html));
        result.record(check_iframes(page.iframes));
        result.record(check_event_handlers(html));
        result.record(check_redirects(html));
        result.record(check_eval_encoded(html));

        let trusted = settings.is_trusted(&page.domain);
        result.record(check_hidden_iframes(html, trusted, result.score));

        result
    }
}

fn check_obfuscation(html: &str) -> Option<Finding> {
    let matches = count_patterns(html, OBFUSCATION_PATTERNS, false);
    if matches <= OBFUSCATION_THRESHOLD {
        return None;
    }

    Some(Finding::new(
        OBFUSCATION_SCORE,
        Alert::malicious(
            "Potentially obfuscated JavaScript detected",
            format!("Found {} instances of suspicious JavaScript patterns", matches),
        ),
    ))
}

fn check_iframes(iframes: u32) -> Option<Finding> {
    if iframes <= IFRAME_THRESHOLD {
        return None;
    }

    Some(Finding::new(
        IFRAME_BASE_SCORE + f64::from(iframes) * IFRAME_PER_FRAME_SCORE,
        Alert::suspicious(
            "Excessive iframes detected",
            format!("Found {} iframes which may indicate hidden content", iframes),
        ),
    ))
}

fn check_event_handlers(html: &str) -> Option<Finding> {
    let count: usize = EVENT_HANDLERS
        .iter()
        .map(|handler| count_regex(html, &format!(r"(?i){}\s*=", handler)))
        .sum();

    if count <= EVENT_HANDLER_THRESHOLD {
        return None;
    }

    let extra = ((count - EVENT_HANDLER_THRESHOLD) as f64 / 2.0).min(EVENT_HANDLER_MAX_EXTRA);
    Some(Finding::new(
        EVENT_HANDLER_BASE_SCORE + extra,
        Alert::suspicious(
            "Excessive event handlers detected",
            format!(
                "Found {} event handlers which may indicate malicious behavior",
                count
            ),
        ),
    ))
}

fn check_redirects(html: &str) -> Option<Finding> {
    let matches = count_patterns(html, REDIRECT_PATTERNS, false);
    if matches <= REDIRECT_THRESHOLD {
        return None;
    }

    Some(Finding::new(
        REDIRECT_SCORE,
        Alert::suspicious(
            "Multiple page redirects detected",
            format!(
                "Found {} potential redirects which may lead to malicious sites",
                matches
            ),
        ),
    ))
}

fn check_eval_encoded(html: &str) -> Option<Finding> {
    let matches = count_regex(html, EVAL_ENCODED_PATTERN);
    if matches == 0 {
        return None;
    }

    Some(Finding::new(
        EVAL_ENCODED_SCORE,
        Alert::malicious(
            "Highly suspicious JavaScript detected",
            format!(
                "Found {} instances of eval() with encoded content, a technique commonly used in malware",
                matches
            ),
        ),
    ))
}

/// A single hidden iframe on an otherwise quiet page is common for analytics
/// and scores low; more than one, or one on a page already scoring
/// `HIDDEN_IFRAME_LENIENT_BELOW` or more, scores as malicious.
fn check_hidden_iframes(html: &str, trusted: bool, running_score: f64) -> Option<Finding> {
    if trusted {
        return None;
    }

    let matches = count_regex(html, HIDDEN_IFRAME_PATTERN);
    match matches {
        0 => None,
        1 if running_score < HIDDEN_IFRAME_LENIENT_BELOW => Some(Finding::new(
            SINGLE_HIDDEN_IFRAME_SCORE,
            Alert::suspicious(
                "Hidden iframe detected",
                "Found a hidden iframe. While sometimes used legitimately, hidden iframes can be used to load content without user awareness.",
            ),
        )),
        n => Some(Finding::new(
            MULTIPLE_HIDDEN_IFRAME_SCORE,
            Alert::malicious(
                "Multiple hidden iframes detected",
                format!(
                    "Found {} hidden iframes, which are often used to load malicious content",
                    n
                ),
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AlertType;

    fn run(page: PageData) -> ModuleResult {
        MaliciousCodeAnalyzer.analyze(&page, &Settings::default())
    }

    fn page(html: &str) -> PageData {
        PageData::new("https://example.com/").html(html)
    }

    #[test]
    fn test_empty_page_is_clean() {
        assert!(run(page("")).is_clean());
    }

    #[test]
    fn test_obfuscation_threshold() {
        // exactly three matches stays below the bar
        assert!(run(page("eval(a) eval(b) atob(c)")).is_clean());

        let result = run(page("eval(a) eval(b) atob(c) document.write(d)"));
        assert_eq!(result.score, 15.0);
        assert_eq!(result.alerts[0].alert_type, AlertType::Malicious);
        assert!(result.alerts[0].details.starts_with("Found 4 instances"));
    }

    #[test]
    fn test_escaped_byte_patterns() {
        let html = r"var s = '\x41\x42\x43\x44';";
        let result = run(page(html));
        assert_eq!(result.score, 15.0);
    }

    #[test]
    fn test_iframe_score_scales() {
        assert!(run(page("").iframes(2)).is_clean());
        assert_eq!(run(page("").iframes(4)).score, 13.0);
    }

    #[test]
    fn test_event_handlers_fractional() {
        let html = "<b onclick=x>".repeat(11);
        assert_eq!(run(page(&html)).score, 5.5);

        let html = "<b ONMOUSEOVER = x>".repeat(40);
        assert_eq!(run(page(&html)).score, 15.0);
    }

    #[test]
    fn test_redirects() {
        let html = "window.location='a'; location.href='b'; top.location='c'";
        let result = run(page(html));
        assert_eq!(result.score, 10.0);
        assert_eq!(result.alerts[0].message, "Multiple page redirects detected");
    }

    #[test]
    fn test_eval_with_encoded_content() {
        let result = run(page("EVAL( atob('ZXZpbA=='))"));

        assert_eq!(result.score, 20.0);
        assert_eq!(result.alerts[0].message, "Highly suspicious JavaScript detected");
    }

    #[test]
    fn test_single_hidden_iframe_on_quiet_page() {
        let result = run(page(r#"<iframe src="/t" style="display: none"></iframe>"#));

        assert_eq!(result.score, 5.0);
        assert_eq!(result.alerts[0].alert_type, AlertType::Suspicious);
    }

    #[test]
    fn test_single_hidden_iframe_after_other_findings() {
        let html = r#"EVAL(atob('x')) <iframe width="0" src="/t"></iframe>"#;
        let result = run(page(html));

        // 20 from eval, then the running score is over the lenient bar
        assert_eq!(result.score, 40.0);
        assert_eq!(result.alerts[1].message, "Multiple hidden iframes detected");
    }

    #[test]
    fn test_multiple_hidden_iframes() {
        let html = r#"<iframe hidden></iframe><iframe height="0"></iframe>"#;
        let result = run(page(html));

        assert_eq!(result.score, 20.0);
        assert!(result.alerts[0].details.starts_with("Found 2 hidden iframes"));
    }

    #[test]
    fn test_hidden_iframe_ignored_on_trusted_domain() {
        let page = PageData::new("https://www.youtube.com/").html("<iframe hidden></iframe>");
        assert!(run(page).is_clean());
    }
}
