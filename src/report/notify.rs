// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Notification policy

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::engine::ScanResult;

/// Whether a verdict is worth interrupting the user for
pub fn should_notify(result: &ScanResult, settings: &Settings) -> bool {
    settings.notify_on_high && result.risk_level.ordinal() >= settings.scan_threshold.ordinal()
}

/// User-facing notification text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Build the notification for `result` on a page titled `page_title`
    pub fn for_result(result: &ScanResult, page_title: &str) -> Self {
        let level = result.risk_level.as_str();
        Self {
            title: format!("{} Risk Detected", level.to_uppercase()),
            message: format!(
                "The page \"{}\" has a {} risk level with {} security concerns.",
                page_title,
                level,
                result.alerts.len()
            ),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
