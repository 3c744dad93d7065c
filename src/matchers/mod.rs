// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Lexical matching primitives shared by every analysis module
//!
//! - Keyword/phrase counting with word boundaries
//! - Regex fragment set counting
//! - Levenshtein-based domain similarity
//! - Stable 32-bit string hash

mod hash;
mod keywords;
mod similarity;

pub use hash::{hash_hex, is_simulated_new_domain, stable_hash};
pub use keywords::{count_keywords, count_patterns, count_regex, KeywordMatches};
pub use similarity::{levenshtein, similarity};
