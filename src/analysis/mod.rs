// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page analysis modules
//!
//! Seven independent scorers, each a pure function of page data and settings:
//! - Domain reputation (typosquatting, TLD, simulated age, HTTP)
//! - Malicious code (obfuscation, iframes, handlers, redirects)
//! - Content (disinformation, clickbait, ads)
//! - Phishing (login forms, brand impersonation, sensitive fields)
//! - Privacy (trackers, cookies, fingerprinting)
//! - Network (mixed content, resource domains)
//! - Social engineering (urgency, fear, reward, call-to-action)

mod code;
mod content;
mod domain;
mod network;
mod phishing;
mod privacy;
pub mod rules;
mod social;

pub use code::MaliciousCodeAnalyzer;
pub use content::ContentAnalyzer;
pub use domain::DomainAnalyzer;
pub use network::NetworkAnalyzer;
pub use phishing::PhishingAnalyzer;
pub use privacy::PrivacyAnalyzer;
pub use social::SocialEngineeringAnalyzer;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::page::PageData;

/// Alert category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    /// Strong indicator of an attack
    Malicious,
    /// Risk factor worth a look
    Suspicious,
    /// Disinformation language
    Disinformation,
    /// Tracking and data collection
    Privacy,
    /// Informational, not a finding
    Info,
}

impl AlertType {
    /// Lowercase name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Malicious => "malicious",
            AlertType::Suspicious => "suspicious",
            AlertType::Disinformation => "disinformation",
            AlertType::Privacy => "privacy",
            AlertType::Info => "info",
        }
    }
}

/// A typed, human-readable finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Short headline
    pub message: String,
    /// Specifics; may contain URLs or other page data
    pub details: String,
}

impl Alert {
    /// Create a new alert
    pub fn new(
        alert_type: AlertType,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            alert_type,
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn malicious(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(AlertType::Malicious, message, details)
    }

    pub fn suspicious(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(AlertType::Suspicious, message, details)
    }

    pub fn disinformation(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(AlertType::Disinformation, message, details)
    }

    pub fn privacy(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(AlertType::Privacy, message, details)
    }

    pub fn info(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(AlertType::Info, message, details)
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.alert_type.as_str(), self.message, self.details)
    }
}

/// One scored finding inside a module
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub score: f64,
    pub alert: Alert,
}

impl Finding {
    pub fn new(score: f64, alert: Alert) -> Self {
        Self { score, alert }
    }
}

/// What every analysis module returns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleResult {
    /// Score contribution; may be fractional
    pub score: f64,
    pub alerts: Vec<Alert>,
}

impl ModuleResult {
    /// Fold a finding into the running total
    pub fn record(&mut self, finding: Option<Finding>) {
        if let Some(finding) = finding {
            self.score += finding.score;
            self.alerts.push(finding.alert);
        }
    }

    /// Nothing found
    pub fn is_clean(&self) -> bool {
        self.score == 0.0 && self.alerts.is_empty()
    }
}

/// A page analysis module.
///
/// Implementations must be pure: no shared mutable state, same output for
/// the same input, safe to run in any order or in parallel.
pub trait Analyzer: Send + Sync {
    /// Module name for logging
    fn name(&self) -> &'static str;

    /// Score one page
    fn analyze(&self, page: &PageData, settings: &Settings) -> ModuleResult;
}

/// All modules in declaration order, which is also alert order
pub fn default_analyzers() -> Vec<Arc<dyn Analyzer>> {
    vec![
        Arc::new(DomainAnalyzer),
        Arc::new(MaliciousCodeAnalyzer),
        Arc::new(ContentAnalyzer),
        Arc::new(PhishingAnalyzer),
        Arc::new(PrivacyAnalyzer),
        Arc::new(NetworkAnalyzer),
        Arc::new(SocialEngineeringAnalyzer),
    ]
}
