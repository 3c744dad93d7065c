// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Levenshtein distance and normalized domain similarity

/// Edit distance between two strings, counted in chars
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for (i, cb) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ca) in a.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                (prev[j] + 1).min(curr[j] + 1).min(prev[j + 1] + 1)
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Normalized similarity in `[0, 1]` between two domains.
///
/// Each input is cut to its first dot-delimited label before comparison, so
/// `google.com` and `google.co.uk` both compare as `google`. An empty input
/// scores 0, as does a pair whose first labels are both empty.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a = a.split('.').next().unwrap_or("");
    let b = b.split('.').next().unwrap_or("");

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("paypal", "paypal"), 0);
    }

    #[test]
    fn test_identical_domains() {
        assert_eq!(similarity("google.com", "google.com"), 1.0);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(similarity("", "x"), 0.0);
        assert_eq!(similarity("x", ""), 0.0);
    }

    #[test]
    fn test_only_first_label_compared() {
        assert_eq!(similarity("google.co.uk", "google.com"), 1.0);
        assert_eq!(similarity(".com", ".net"), 0.0);
    }

    #[test]
    fn test_typosquat_range() {
        // one substitution in six chars
        let s = similarity("paypa1.com", "paypal.com");
        assert!(s > 0.8 && s < 1.0);

        let s = similarity("example.com", "google.com");
        assert!(s < 0.8);
    }
}
