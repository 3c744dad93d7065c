// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Hostnames the user never wants scanned

use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::{read_json, write_json};
use crate::error::Result;

/// Blocked hostnames, exact match, kept in the order they were added
pub struct BlockList {
    path: Option<PathBuf>,
    domains: RwLock<Vec<String>>,
}

impl BlockList {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            domains: RwLock::new(Vec::new()),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let domains = read_json(&path)?.unwrap_or_default();

        Ok(Self {
            path: Some(path),
            domains: RwLock::new(domains),
        })
    }

    /// Add `domain`; returns false if it was already blocked
    pub fn block(&self, domain: &str) -> Result<bool> {
        let mut domains = self.domains.write();
        if domains.iter().any(|d| d == domain) {
            return Ok(false);
        }

        domains.push(domain.to_string());
        self.persist(&domains)?;
        tracing::info!(domain, "Domain blocked");
        Ok(true)
    }

    /// Remove `domain`; returns false if it was not blocked
    pub fn unblock(&self, domain: &str) -> Result<bool> {
        let mut domains = self.domains.write();
        let before = domains.len();
        domains.retain(|d| d != domain);
        if domains.len() == before {
            return Ok(false);
        }

        self.persist(&domains)?;
        tracing::info!(domain, "Domain unblocked");
        Ok(true)
    }

    pub fn is_blocked(&self, domain: &str) -> bool {
        self.domains.read().iter().any(|d| d == domain)
    }

    pub fn list(&self) -> Vec<String> {
        self.domains.read().clone()
    }

    fn persist(&self, domains: &[String]) -> Result<()> {
        match self.path {
            Some(ref path) => write_json(path, &domains),
            None => Ok(()),
        }
    }
}
