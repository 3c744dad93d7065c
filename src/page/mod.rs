// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page data and the sources that produce it
//!
//! - `PageData`: the flat record every analysis module reads
//! - Regex-based extraction from raw markup, with upstream size caps
//! - `PageSource` trait with HTTP and static implementations

mod data;
pub mod extract;
mod source;

pub use data::{MetaTag, PageData};
pub use extract::{extract_page_data, visible_text};
pub use source::{HttpPageSource, HttpPageSourceConfig, PageSource, StaticPageSource};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
