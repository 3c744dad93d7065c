// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Social engineering language and call-to-action checks

use super::rules::*;
use super::{Alert, Analyzer, Finding, ModuleResult};
use crate::config::Settings;
use crate::matchers::count_keywords;
use crate::page::PageData;

#[derive(Debug, Clone, Copy, Default)]
pub struct SocialEngineeringAnalyzer;

impl Analyzer for SocialEngineeringAnalyzer {
    fn name(&self) -> &'static str {
        "social_engineering"
    }

    fn analyze(&self, page: &PageData, _settings: &Settings) -> ModuleResult {
        let text = page.text.as_str();
        let mut result = ModuleResult::default();

        result.record(check_tactic(
            text,
            URGENCY_KEYWORDS,
            URGENCY_THRESHOLD,
            "Urgency tactics detected",
            "This page uses language creating a false sense of urgency",
        ));
        result.record(check_tactic(
            text,
            FEAR_KEYWORDS,
            FEAR_THRESHOLD,
            "Fear tactics detected",
            "This page uses language designed to create fear",
        ));
        result.record(check_tactic(
            text,
            REWARD_KEYWORDS,
            REWARD_THRESHOLD,
            "Prize/reward tactics detected",
            "This page uses language suggesting prizes or rewards",
        ));
        result.record(check_buttons(&page.button_text));

        result
    }
}

fn check_tactic(
    text: &str,
    keywords: &[&str],
    threshold: usize,
    message: &str,
    lead: &str,
) -> Option<Finding> {
    let found = count_keywords(text, keywords);
    if found.count <= threshold {
        return None;
    }

    Some(Finding::new(
        TACTIC_SCORE,
        Alert::suspicious(message, format!("{}: {}", lead, found.joined())),
    ))
}

fn check_buttons(labels: &[String]) -> Option<Finding> {
    let flagged: Vec<&str> = labels
        .iter()
        .filter(|label| {
            let lower = label.to_lowercase();
            SUSPICIOUS_BUTTON_TEXT.iter().any(|s| lower.contains(s))
        })
        .map(String::as_str)
        .collect();

    if flagged.is_empty() {
        return None;
    }

    Some(Finding::new(
        SUSPICIOUS_BUTTON_SCORE,
        Alert::suspicious(
            "Suspicious call-to-action buttons",
            format!(
                "This page contains buttons with potentially misleading text: {}",
                flagged.join(", ")
            ),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(page: PageData) -> ModuleResult {
        SocialEngineeringAnalyzer.analyze(&page, &Settings::default())
    }

    fn page(text: &str) -> PageData {
        PageData::new("https://prize.example/").text(text)
    }

    #[test]
    fn test_urgency_needs_three_hits() {
        assert!(run(page("Urgent: act now")).is_clean());

        let result = run(page("URGENT! Act now, offer expires tonight"));
        assert_eq!(result.score, 10.0);
        assert_eq!(
            result.alerts[0].details,
            "This page uses language creating a false sense of urgency: urgent, act now, expires"
        );
    }

    #[test]
    fn test_fear_tactics() {
        let result = run(page("Your account was hacked. Stolen data, fraud and a breach."));

        assert_eq!(result.score, 10.0);
        assert_eq!(result.alerts[0].message, "Fear tactics detected");
    }

    #[test]
    fn test_reward_tactics() {
        let result = run(page("Congratulations winner! Claim your free prize"));

        assert_eq!(result.score, 10.0);
        assert_eq!(result.alerts[0].message, "Prize/reward tactics detected");
    }

    #[test]
    fn test_suspicious_buttons() {
        let page = page("").button_text(["Continue", "Download NOW", "Allow notifications"]);
        let result = run(page);

        assert_eq!(result.score, 5.0);
        assert!(result.alerts[0]
            .details
            .ends_with("misleading text: Download NOW, Allow notifications"));
    }

    #[test]
    fn test_all_tactics_stack() {
        let text = "Urgent warning: act now! Risk of fraud, scam and theft threat. \
                    Congratulations, you won a free bonus gift";
        let result = run(page(text).button_text(["Claim now"]));

        assert_eq!(result.score, 35.0);
        assert_eq!(result.alerts.len(), 4);
    }
}
