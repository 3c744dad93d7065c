// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::RiskLevel;
use crate::analysis::Alert;

/// Final verdict for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub risk_level: RiskLevel,
    /// Adjusted score, floored and clamped to 0..=100
    pub risk_score: u32,
    /// Module alerts in module order, then aggregator alerts
    pub alerts: Vec<Alert>,
    /// Local wall-clock time of the scan
    pub scan_time: String,
    pub url: String,
    /// Set when the input was reduced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_scan: Option<bool>,
}

impl ScanResult {
    /// Current local time in the format stored with results
    pub fn timestamp() -> String {
        Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }

    /// Refresh the scan time
    pub fn restamp(&mut self) {
        self.scan_time = Self::timestamp();
    }

    pub fn is_partial(&self) -> bool {
        self.partial_scan.unwrap_or(false)
    }
}
