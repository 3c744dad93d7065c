// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Risk levels and score bucketing

use serde::{Deserialize, Serialize};

/// Inclusive upper bounds of the low, medium and high buckets
pub const LOW_MAX: f64 = 30.0;
pub const MEDIUM_MAX: f64 = 60.0;
pub const HIGH_MAX: f64 = 85.0;

/// Coarse risk bucket.
///
/// Ordered: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Notification thresholds use the same scale as verdicts
pub type ScanThreshold = RiskLevel;

impl RiskLevel {
    /// Bucket an aggregate score. Bounds are inclusive on the upper side.
    pub fn from_score(score: f64) -> Self {
        if score <= LOW_MAX {
            RiskLevel::Low
        } else if score <= MEDIUM_MAX {
            RiskLevel::Medium
        } else if score <= HIGH_MAX {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    /// Parse a lowercase level name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "critical" => Some(RiskLevel::Critical),
            _ => None,
        }
    }

    /// Parse a threshold, falling back to medium for anything unknown
    pub fn from_str_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or(RiskLevel::Medium)
    }

    /// 1 for low up to 4 for critical
    pub fn ordinal(&self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
            RiskLevel::Critical => 4,
        }
    }

    /// Ordinal of a level name; unknown names rank 0
    pub fn ordinal_of(s: &str) -> u8 {
        Self::parse(s).map_or(0, |level| level.ordinal())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
