// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scan state kept between scans
//!
//! - `ScanCache`: in-memory recent results with expiry
//! - `ResultStore`: JSON file of results keyed by URL, redacted when asked
//! - `BlockList`: JSON file of hostnames that are never scanned

mod blocklist;
mod cache;
mod results;

pub use blocklist::BlockList;
pub use cache::ScanCache;
pub use results::{ResultStore, StoredResult};

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Read a JSON document, `None` when the file does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| Error::store(path.display().to_string(), e.to_string()))
}

/// Write a JSON document, creating parent directories
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
