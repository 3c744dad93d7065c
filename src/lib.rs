// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # pagerisk - Heuristic Web Page Risk Scoring
//!
//! Scores a web page for security and trust risk from a flat snapshot of its
//! content. Seven independent analysis modules look for signals, an
//! aggregator combines them into a 0-100 score and a risk level.
//!
//! ## Features
//!
//! - Domain reputation: typosquatting, suspicious TLDs, insecure transport
//! - Malicious code: obfuscation, hidden iframes, redirects, encoded eval
//! - Content: disinformation language, clickbait titles, ad density
//! - Phishing: login forms, brand impersonation, sensitive data collection
//! - Privacy: tracking, cookie volume, browser fingerprinting
//! - Network: mixed content, external domain spread, tracking hosts
//! - Social engineering: urgency, fear and reward language, misleading buttons
//! - Trusted domain discount, HTTPS cap, deep scan correction
//! - Redacted result storage and notification policy
//!
//! ## Example
//!
//! ```rust
//! use pagerisk::{analyze, PageData, RiskLevel, Settings};
//!
//! let page = PageData::new("http://login-portal.net/")
//!     .html(r#"<form><input name="username"><input type="password"></form>"#);
//!
//! let result = analyze(&page, &Settings::default());
//! assert!(result.risk_level >= RiskLevel::Low);
//! for alert in &result.alerts {
//!     println!("{}", alert);
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod matchers;
pub mod page;
pub mod report;
pub mod service;
pub mod store;

// Re-exports for convenience

// Analysis
pub use analysis::{Alert, AlertType, Analyzer, ModuleResult};

// Engine
pub use engine::{analyze, RiskEngine, RiskLevel, ScanResult};

// Configuration
pub use config::{Settings, SettingsStore};

// Page data
pub use page::{extract_page_data, HttpPageSource, PageData, PageSource, StaticPageSource};

// Reporting
pub use report::{anonymize, should_notify, AnonymizedResult, Notification};

// Stores
pub use store::{BlockList, ResultStore, ScanCache, StoredResult};

// Service
pub use service::{ScanOutcome, ScanService, ScanServiceConfig};

// Errors
pub use error::{Error, ErrorContext, Result};

/// pagerisk version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
