// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Keyword and regex fragment counting

use std::collections::HashMap;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use regex::Regex;

lazy_static! {
    /// Compiled patterns, keyed by their final source text
    static ref REGEX_CACHE: RwLock<HashMap<String, Regex>> = RwLock::new(HashMap::new());
}

/// Result of counting a keyword list against a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatches<'a> {
    /// Total matches across all keywords
    pub count: usize,
    /// Keywords that matched at least once, in list order
    pub matched: Vec<&'a str>,
}

impl KeywordMatches<'_> {
    /// Matched keywords joined for alert details
    pub fn joined(&self) -> String {
        self.matched.join(", ")
    }
}

/// Get a compiled regex from the cache, compiling on first use.
///
/// Invalid patterns are logged and yield `None` so a bad table entry only
/// zeroes its own contribution.
fn cached_regex(pattern: &str) -> Option<Regex> {
    if let Some(re) = REGEX_CACHE.read().get(pattern) {
        return Some(re.clone());
    }

    match Regex::new(pattern) {
        Ok(re) => {
            REGEX_CACHE.write().insert(pattern.to_string(), re.clone());
            Some(re)
        }
        Err(e) => {
            tracing::warn!(pattern, error = %e, "Skipping invalid pattern");
            None
        }
    }
}

/// Count non-overlapping matches of a single regex in `text`
pub fn count_regex(text: &str, pattern: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    cached_regex(pattern)
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0)
}

/// Count word-bounded, case-insensitive occurrences of each keyword.
///
/// Keywords are regex fragments and are used as written. Word boundaries are
/// ASCII-only, so non-ASCII letters next to a keyword do not block a match.
pub fn count_keywords<'a>(text: &str, keywords: &[&'a str]) -> KeywordMatches<'a> {
    let mut result = KeywordMatches::default();

    for &keyword in keywords {
        let matches = count_regex(text, &format!(r"(?i)(?-u:\b){}(?-u:\b)", keyword));
        if matches > 0 {
            result.count += matches;
            result.matched.push(keyword);
        }
    }

    result
}

/// Join fragments with alternation and count global matches
pub fn count_patterns(text: &str, fragments: &[&str], case_insensitive: bool) -> usize {
    if fragments.is_empty() {
        return 0;
    }

    let joined = fragments.join("|");
    let pattern = if case_insensitive {
        format!("(?i){}", joined)
    } else {
        joined
    };

    count_regex(text, &pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_word_boundary() {
        let found = count_keywords("The hoax was a HOAX, not a hoaxer", &["hoax", "sheeple"]);

        assert_eq!(found.count, 2);
        assert_eq!(found.matched, vec!["hoax"]);
    }

    #[test]
    fn test_keywords_ascii_word_boundary() {
        assert_eq!(count_keywords("这是一个hoax骗局", &["hoax"]).count, 1);
        assert_eq!(count_keywords("ébreaking news", &["breaking news"]).count, 1);
        assert_eq!(count_keywords("hoax_site", &["hoax"]).count, 0);
    }

    #[test]
    fn test_keywords_preserve_list_order() {
        let found = count_keywords(
            "wake up, this is a cover-up",
            &["conspiracy", "cover-up", "wake up"],
        );

        assert_eq!(found.count, 2);
        assert_eq!(found.matched, vec!["cover-up", "wake up"]);
        assert_eq!(found.joined(), "cover-up, wake up");
    }

    #[test]
    fn test_keywords_empty_text() {
        let found = count_keywords("", &["login"]);
        assert_eq!(found, KeywordMatches::default());
    }

    #[test]
    fn test_patterns_case_sensitivity() {
        let html = "eval(x); EVAL(y); atob(z)";

        assert_eq!(count_patterns(html, &[r"eval\(", r"atob\("], false), 2);
        assert_eq!(count_patterns(html, &[r"eval\(", r"atob\("], true), 3);
    }

    #[test]
    fn test_invalid_pattern_counts_zero() {
        assert_eq!(count_regex("abc", "(unclosed"), 0);
    }
}
