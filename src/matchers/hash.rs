// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stable 32-bit rolling hash
//!
//! `h = h * 31 + unit` over UTF-16 code units, wrapped to a signed 32-bit
//! integer. Used as the domain-age stand-in and as the anonymized URL id.

/// Signed 32-bit rolling hash of `s`
pub fn stable_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Absolute hash value as lowercase hex, at most 8 chars
pub fn hash_hex(s: &str) -> String {
    let mut hex = format!("{:x}", stable_hash(s).unsigned_abs());
    hex.truncate(8);
    hex
}

/// Simulated "recently registered" signal: one domain in ten is flagged.
///
/// There is no WHOIS lookup behind this; it only needs to be deterministic.
pub fn is_simulated_new_domain(domain: &str) -> bool {
    stable_hash(domain).unsigned_abs() % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_hash_values() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("ab"), 3105);
        // wraps past i32::MAX
        assert_eq!(stable_hash("google.com"), -1536293812);
    }

    #[test]
    fn test_hash_hex() {
        assert_eq!(hash_hex(""), "0");
        assert_eq!(hash_hex("ab"), "c21");
        assert_eq!(hash_hex("google.com"), "5b91fbb4");
        assert_eq!(hash_hex("https://example.com/page"), "4f4aff30");
    }

    #[test]
    fn test_simulated_new_domain() {
        assert!(is_simulated_new_domain("i.com"));
        assert!(!is_simulated_new_domain("example.com"));
        assert!(!is_simulated_new_domain("google.com"));
    }
}
