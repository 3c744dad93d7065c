// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Persisted scan history

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::{read_json, write_json};
use crate::config::Settings;
use crate::engine::ScanResult;
use crate::error::Result;
use crate::report::{anonymize, AnonymizedResult};

/// One history entry, redacted or not depending on settings at store time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredResult {
    Anonymized(AnonymizedResult),
    Plain(ScanResult),
}

impl StoredResult {
    pub fn result(&self) -> &ScanResult {
        match self {
            StoredResult::Anonymized(anonymized) => &anonymized.result,
            StoredResult::Plain(result) => result,
        }
    }

    pub fn is_anonymized(&self) -> bool {
        matches!(self, StoredResult::Anonymized(_))
    }
}

/// Results keyed by page URL, one entry per URL, backed by a JSON file
pub struct ResultStore {
    path: Option<PathBuf>,
    records: RwLock<BTreeMap<String, StoredResult>>,
}

impl ResultStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load history from `path`; a missing file starts empty
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = read_json(&path)?.unwrap_or_default();

        Ok(Self {
            path: Some(path),
            records: RwLock::new(records),
        })
    }

    /// Record `result` under `url`, replacing any earlier entry.
    ///
    /// The scan time is refreshed and the record is redacted when
    /// `anonymize_data` is on.
    pub fn store(&self, url: &str, result: &ScanResult, settings: &Settings) -> Result<StoredResult> {
        let mut stamped = result.clone();
        stamped.restamp();

        let record = if settings.anonymize_data {
            StoredResult::Anonymized(anonymize(url, &stamped))
        } else {
            StoredResult::Plain(stamped)
        };

        let mut records = self.records.write();
        records.insert(url.to_string(), record.clone());
        self.persist(&records)?;

        tracing::debug!(url, anonymized = record.is_anonymized(), "Stored scan result");
        Ok(record)
    }

    pub fn get(&self, url: &str) -> Option<StoredResult> {
        self.records.read().get(url).cloned()
    }

    /// All entries ordered by URL
    pub fn all(&self) -> Vec<(String, StoredResult)> {
        self.records
            .read()
            .iter()
            .map(|(url, record)| (url.clone(), record.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Forget every entry
    pub fn clear(&self) -> Result<()> {
        let mut records = self.records.write();
        records.clear();
        self.persist(&records)
    }

    fn persist(&self, records: &BTreeMap<String, StoredResult>) -> Result<()> {
        match self.path {
            Some(ref path) => write_json(path, records),
            None => Ok(()),
        }
    }
}
