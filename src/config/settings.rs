// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scanner settings and their JSON-backed store

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::engine::RiskLevel;
use crate::error::{Error, Result};

/// Domains trusted out of the box, bare and `www.` forms
pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "instagram.com", "www.instagram.com",
    "facebook.com", "www.facebook.com",
    "google.com", "www.google.com",
    "microsoft.com", "www.microsoft.com",
    "apple.com", "www.apple.com",
    "amazon.com", "www.amazon.com",
    "twitter.com", "www.twitter.com",
    "linkedin.com", "www.linkedin.com",
    "youtube.com", "www.youtube.com",
    "netflix.com", "www.netflix.com",
    "github.com", "www.github.com",
    "openai.com", "chat.openai.com", "www.openai.com",
];

/// Process-wide scanner settings.
///
/// Serialized in camelCase so stored extension settings load as-is. Every
/// field is optional on input; missing fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Scan pages automatically when they finish loading
    pub auto_scan: bool,
    /// Delay before an automatic scan starts (ms)
    #[serde(rename = "scanInterval")]
    pub scan_interval_ms: u64,
    /// Master switch for user notifications
    pub notify_on_high: bool,
    /// How long a cached result stays fresh (ms)
    #[serde(rename = "cacheExpiry")]
    pub cache_expiry_ms: u64,
    /// Minimum risk level that triggers a notification
    #[serde(deserialize_with = "lossy_threshold")]
    pub scan_threshold: RiskLevel,
    /// Redact stored results
    pub anonymize_data: bool,
    /// UI preference, carried for round-tripping
    pub dark_mode: bool,
    /// Allow-list, matched exactly or as a parent domain
    pub trusted_domains: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_scan: true,
            scan_interval_ms: 5_000,
            notify_on_high: true,
            cache_expiry_ms: 30 * 60 * 1000,
            scan_threshold: RiskLevel::Medium,
            anonymize_data: true,
            dark_mode: false,
            trusted_domains: DEFAULT_TRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Unknown or malformed thresholds fall back to medium
fn lossy_threshold<'de, D>(deserializer: D) -> std::result::Result<RiskLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map_or(RiskLevel::Medium, RiskLevel::from_str_lossy))
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the trusted domain list
    pub fn trusted_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Set notification threshold
    pub fn scan_threshold(mut self, level: RiskLevel) -> Self {
        self.scan_threshold = level;
        self
    }

    /// Enable/disable notifications
    pub fn notify_on_high(mut self, enabled: bool) -> Self {
        self.notify_on_high = enabled;
        self
    }

    /// Enable/disable anonymized storage
    pub fn anonymize_data(mut self, enabled: bool) -> Self {
        self.anonymize_data = enabled;
        self
    }

    /// Whether `domain` equals a trusted entry or is a subdomain of one
    pub fn is_trusted(&self, domain: &str) -> bool {
        self.trusted_domains.iter().any(|trusted| {
            domain == trusted
                || (domain.len() > trusted.len()
                    && domain.ends_with(trusted.as_str())
                    && domain.as_bytes()[domain.len() - trusted.len() - 1] == b'.')
        })
    }

    /// Overlay a partial JSON object onto these settings.
    ///
    /// Each key present in `overrides` replaces the field wholesale; unknown
    /// keys are ignored.
    pub fn merge(&self, overrides: &Value) -> Result<Settings> {
        let overrides = overrides
            .as_object()
            .ok_or_else(|| Error::Config("settings overrides must be a JSON object".into()))?;

        let mut base = serde_json::to_value(self)?;
        if let Value::Object(ref mut fields) = base {
            for (key, value) in overrides {
                fields.insert(key.clone(), value.clone());
            }
        }

        Ok(serde_json::from_value(base)?)
    }
}

/// Settings persisted as a JSON file.
///
/// Readers get snapshots; an update only affects scans started after it.
pub struct SettingsStore {
    path: Option<PathBuf>,
    current: RwLock<Settings>,
}

impl SettingsStore {
    /// Store that never touches disk
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            path: None,
            current: RwLock::new(settings),
        }
    }

    /// Load settings from `path`, merging persisted overrides into defaults.
    ///
    /// A missing file is created with the defaults.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let settings = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let overrides: Value = serde_json::from_str(&raw)
                .map_err(|e| Error::store(path.display().to_string(), e.to_string()))?;
            Settings::default().merge(&overrides)?
        } else {
            Settings::default()
        };

        let store = Self {
            path: Some(path),
            current: RwLock::new(settings),
        };

        if store.path.as_ref().map_or(false, |p| !p.exists()) {
            store.persist(&store.get())?;
        }

        tracing::debug!(path = ?store.path, "Loaded settings");
        Ok(store)
    }

    /// Snapshot of the current settings
    pub fn get(&self) -> Settings {
        self.current.read().clone()
    }

    /// Merge `overrides` into the current settings and persist
    pub fn update(&self, overrides: &Value) -> Result<Settings> {
        let updated = self.current.read().merge(overrides)?;
        self.persist(&updated)?;
        *self.current.write() = updated.clone();
        tracing::info!("Settings updated");
        Ok(updated)
    }

    /// Restore defaults and persist
    pub fn reset(&self) -> Result<Settings> {
        let defaults = Settings::default();
        self.persist(&defaults)?;
        *self.current.write() = defaults.clone();
        tracing::info!("Settings reset to defaults");
        Ok(defaults)
    }

    fn persist(&self, settings: &Settings) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.scan_threshold, RiskLevel::Medium);
        assert!(settings.notify_on_high);
        assert!(settings.anonymize_data);
        assert_eq!(settings.cache_expiry_ms, 1_800_000);
        assert_eq!(settings.trusted_domains.len(), 25);
    }

    #[test]
    fn test_trusted_suffix_match() {
        let settings = Settings::new().trusted_domains(["github.com"]);

        assert!(settings.is_trusted("github.com"));
        assert!(settings.is_trusted("gist.github.com"));
        assert!(!settings.is_trusted("evilgithub.com"));
        assert!(!settings.is_trusted("github.com.evil.tk"));
    }

    #[test]
    fn test_merge_partial() {
        let merged = Settings::default()
            .merge(&json!({ "scanThreshold": "high", "trustedDomains": ["example.org"] }))
            .unwrap();

        assert_eq!(merged.scan_threshold, RiskLevel::High);
        assert_eq!(merged.trusted_domains, vec!["example.org".to_string()]);
        assert!(merged.notify_on_high);
    }

    #[test]
    fn test_garbage_threshold_falls_back() {
        let merged = Settings::default()
            .merge(&json!({ "scanThreshold": "extreme" }))
            .unwrap();
        assert_eq!(merged.scan_threshold, RiskLevel::Medium);

        let merged = Settings::default().merge(&json!({ "scanThreshold": 7 })).unwrap();
        assert_eq!(merged.scan_threshold, RiskLevel::Medium);
    }

    #[test]
    fn test_merge_rejects_non_object() {
        assert!(Settings::default().merge(&json!(["high"])).is_err());
    }

    #[test]
    fn test_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::open(&path).unwrap();
        assert!(path.exists());

        store.update(&json!({ "notifyOnHigh": false })).unwrap();
        let reopened = SettingsStore::open(&path).unwrap();
        assert!(!reopened.get().notify_on_high);

        reopened.reset().unwrap();
        assert!(SettingsStore::open(&path).unwrap().get().notify_on_high);
    }

    #[test]
    fn test_snapshot_not_retroactive() {
        let store = SettingsStore::in_memory(Settings::default());
        let snapshot = store.get();

        store.update(&json!({ "scanThreshold": "critical" })).unwrap();

        assert_eq!(snapshot.scan_threshold, RiskLevel::Medium);
        assert_eq!(store.get().scan_threshold, RiskLevel::Critical);
    }
}
