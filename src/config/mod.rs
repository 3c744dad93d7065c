// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scanner configuration
//!
//! Settings are loaded once, merged with persisted overrides, and handed to
//! each scan as an immutable snapshot.

mod settings;

pub use settings::{Settings, SettingsStore, DEFAULT_TRUSTED_DOMAINS};
