// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Recent scan results, keyed by URL

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::engine::ScanResult;

#[derive(Debug, Clone)]
struct CachedScan {
    result: ScanResult,
    stored_at: Instant,
}

/// Shared in-memory cache. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct ScanCache {
    entries: Arc<DashMap<String, CachedScan>>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `url` if it is younger than `expiry`.
    ///
    /// Stale entries are dropped on lookup.
    pub fn get(&self, url: &str, expiry: Duration) -> Option<ScanResult> {
        let fresh = {
            let entry = self.entries.get(url)?;
            if entry.stored_at.elapsed() < expiry {
                Some(entry.result.clone())
            } else {
                None
            }
        };

        if fresh.is_none() {
            self.entries.remove(url);
        }
        fresh
    }

    pub fn insert(&self, url: impl Into<String>, result: ScanResult) {
        self.entries.insert(
            url.into(),
            CachedScan {
                result,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn remove(&self, url: &str) {
        self.entries.remove(url);
    }

    /// Drop every entry older than `expiry`
    pub fn remove_expired(&self, expiry: Duration) {
        self.entries.retain(|_, cached| cached.stored_at.elapsed() < expiry);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RiskLevel;

    fn result(url: &str) -> ScanResult {
        ScanResult {
            risk_level: RiskLevel::Low,
            risk_score: 0,
            alerts: Vec::new(),
            scan_time: ScanResult::timestamp(),
            url: url.to_string(),
            partial_scan: None,
        }
    }

    #[test]
    fn test_fresh_hit() {
        let cache = ScanCache::new();
        cache.insert("https://example.com/", result("https://example.com/"));

        let hit = cache.get("https://example.com/", Duration::from_secs(60));
        assert_eq!(hit.unwrap().url, "https://example.com/");
        assert!(cache.get("https://other.example/", Duration::from_secs(60)).is_none());
    }

    #[test]
    fn test_expired_entry_dropped() {
        let cache = ScanCache::new();
        cache.insert("https://example.com/", result("https://example.com/"));

        assert!(cache.get("https://example.com/", Duration::ZERO).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = ScanCache::new();
        let other = cache.clone();
        other.insert("https://example.com/", result("https://example.com/"));

        assert_eq!(cache.len(), 1);
        cache.remove_expired(Duration::ZERO);
        assert!(other.is_empty());
    }
}
