// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Static keyword, pattern and weight tables
//!
//! Keyword entries are regex fragments wrapped in ASCII word boundaries at match time.
//! Pattern entries are joined with `|` and used as written. The numbers are
//! calibration values; changing any of them changes every score.

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// Typosquatting targets
pub const POPULAR_DOMAINS: &[&str] = &[
    "google.com", "facebook.com", "amazon.com", "apple.com", "microsoft.com",
    "netflix.com", "paypal.com", "instagram.com", "twitter.com", "linkedin.com",
];

pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".top", ".xyz", ".gq", ".ml", ".ga", ".cf", ".info", ".biz", ".pw",
];

/// Exclusive similarity bounds for a typosquat
pub const TYPOSQUAT_MIN_SIMILARITY: f64 = 0.8;
pub const TYPOSQUAT_MAX_SIMILARITY: f64 = 1.0;

pub const TYPOSQUAT_SCORE: f64 = 15.0;
pub const SUSPICIOUS_TLD_SCORE: f64 = 10.0;
pub const NEW_DOMAIN_SCORE: f64 = 5.0;
pub const INSECURE_CONNECTION_SCORE: f64 = 10.0;

// ---------------------------------------------------------------------------
// Malicious code
// ---------------------------------------------------------------------------

pub const OBFUSCATION_PATTERNS: &[&str] = &[
    r"eval\(", r"document\.write\(", r"fromCharCode", r"unescape\(",
    r"String\.fromCharCode", r"\\x[0-9a-fA-F]{2}", r"atob\(",
    r"escape\(", r"\\u[0-9a-fA-F]{4}", r"decodeURIComponent",
    r"Function\(.*\)", r"\\\\[0-9]{1,3}", r"parseInt\(.+,.+\)",
];

pub const EVENT_HANDLERS: &[&str] = &[
    "onmouseover", "onmouseout", "onload", "onunload", "onbeforeunload",
    "onblur", "onfocus", "onchange", "onclick", "ondblclick",
    "onkeydown", "onkeypress", "onkeyup", "onmousedown", "onmousemove",
    "onmouseup", "onresize", "onscroll", "onsubmit",
];

pub const REDIRECT_PATTERNS: &[&str] = &[
    r"window\.location", r"document\.location", r"self\.location",
    r"top\.location", r"window\.navigate", r"window\.open",
    r"window\.replace", r"location\.href", r"location\.replace",
];

pub const EVAL_ENCODED_PATTERN: &str =
    r"(?i)eval\s*\(\s*(atob\s*\(|unescape\s*\(|String\.fromCharCode|decodeURIComponent\s*\()";

pub const HIDDEN_IFRAME_PATTERN: &str =
    r#"(?i)<iframe[^>]*(hidden|display\s*:\s*none|visibility\s*:\s*hidden|height\s*=\s*['"]?0|width\s*=\s*['"]?0)[^>]*>"#;

pub const OBFUSCATION_THRESHOLD: usize = 3;
pub const OBFUSCATION_SCORE: f64 = 15.0;
pub const IFRAME_THRESHOLD: u32 = 2;
pub const IFRAME_BASE_SCORE: f64 = 5.0;
pub const IFRAME_PER_FRAME_SCORE: f64 = 2.0;
pub const EVENT_HANDLER_THRESHOLD: usize = 10;
pub const EVENT_HANDLER_BASE_SCORE: f64 = 5.0;
pub const EVENT_HANDLER_MAX_EXTRA: f64 = 10.0;
pub const REDIRECT_THRESHOLD: usize = 2;
pub const REDIRECT_SCORE: f64 = 10.0;
pub const EVAL_ENCODED_SCORE: f64 = 20.0;
/// A lone hidden iframe is tolerated while the running score is below this
pub const HIDDEN_IFRAME_LENIENT_BELOW: f64 = 15.0;
pub const SINGLE_HIDDEN_IFRAME_SCORE: f64 = 5.0;
pub const MULTIPLE_HIDDEN_IFRAME_SCORE: f64 = 20.0;

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

pub const DISINFORMATION_KEYWORDS: &[&str] = &[
    "conspiracy", "hoax", "fake news", "deep state", "cover-up", "coverup",
    "they don't want you to know", "what they won't tell you", "secret cure",
    "miracle cure", "government is hiding", "they are lying", "mainstream media won't report",
    "doctors hate this", "what big pharma doesn't want you to know",
    "shocking truth", "wake up", "sheeple", "plandemic", "new world order",
    "illuminati", "mind control", "chemtrails", "microchipped", "tracking",
    "surveillance", "they're watching", "controlled opposition", "false flag",
    "crisis actor", "depopulation", "agenda", "globalist", "cabal",
];

pub const CLICKBAIT_PHRASES: &[&str] = &[
    "you won't believe", "shocking", "mind-blowing", "amazing",
    "you'll never guess", "unbelievable", "incredible", "insane",
    "what happens next", "jaw-dropping", "secret", "they don't want you to know",
    "this one trick", "doctors hate", "miracle", "revolutionary",
];

pub const AD_INDICATORS: &[&str] = &[
    "advertisement", "sponsor", "promoted", "ad-", "-ad", "banner",
    "popup", "pop-up", "popunder", "pop-under",
];

pub const DISINFORMATION_PER_MATCH: f64 = 2.0;
pub const DISINFORMATION_MAX_SCORE: f64 = 20.0;
pub const CLICKBAIT_SCORE: f64 = 5.0;
pub const AD_THRESHOLD: usize = 15;
pub const AD_SCORE: f64 = 5.0;

// ---------------------------------------------------------------------------
// Phishing
// ---------------------------------------------------------------------------

pub const LOGIN_INDICATORS: &[&str] = &[
    "password", "login", "signin", "username", "email", "account",
    "user", "pass", "log in", "sign in", "authenticate",
];

pub const PASSWORD_FIELD_PATTERN: &str = r#"(?i)<input[^>]*type=["']password["'][^>]*>"#;

pub const COMMON_BRANDS: &[&str] = &[
    "paypal", "apple", "microsoft", "amazon", "google", "facebook",
    "instagram", "netflix", "bank", "chase", "wellsfargo", "citibank",
    "amex", "americanexpress", "visa", "mastercard", "discover",
    "gmail", "yahoo", "outlook", "hotmail", "twitter", "linkedin",
    "dropbox", "steam", "epic games", "ubisoft", "rockstar", "blizzard",
    "coinbase", "binance", "blockchain", "bitcoin",
];

pub const SENSITIVE_DATA_FIELDS: &[&str] = &[
    "credit card", "card number", "cvv", "cvc", "expiry", "expiration",
    "social security", "ssn", "passport", "driver license", "id number",
    "tax id", "bank account", "routing number", "swift", "iban",
];

pub const FAKE_SECURITY_PHRASES: &[&str] = &[
    "secure site", "trusted site", "verified by", "protected by",
    "encrypted", "safe browsing", "ssl protected", "secure connection",
];

pub const LOGIN_INDICATOR_THRESHOLD: usize = 3;
pub const LOGIN_FORM_SCORE: f64 = 10.0;
pub const INSECURE_LOGIN_SCORE: f64 = 20.0;
pub const BRAND_IMPERSONATION_SCORE: f64 = 15.0;
pub const SENSITIVE_DATA_SCORE: f64 = 15.0;
pub const INSECURE_SENSITIVE_DATA_SCORE: f64 = 25.0;
pub const FAKE_SECURITY_SCORE: f64 = 15.0;

// ---------------------------------------------------------------------------
// Privacy
// ---------------------------------------------------------------------------

pub const TRACKING_KEYWORDS: &[&str] = &[
    "analytics", "tracking", "tracker", "pixel", "beacon",
    "google-analytics", "facebook-pixel", "gtag", "fbq",
    "mixpanel", "hotjar", "clicktale", "doubleclick", "adsense",
];

/// Matched case-sensitively, each fragment on its own
pub const FINGERPRINTING_PATTERNS: &[&str] = &[
    "canvas.toDataURL", "canvas.getImageData", "navigator.userAgent",
    "navigator.plugins", "navigator.mimeTypes", "navigator.language",
    "navigator.languages", "navigator.platform", "screen.colorDepth",
    "screen.pixelDepth", "WebGLRenderingContext", "AudioContext",
    "navigator.hardwareConcurrency", "navigator.deviceMemory",
];

pub const TRACKING_THRESHOLD: usize = 10;
pub const TRACKING_SCORE: f64 = 5.0;
/// Cookie string length, in bytes
pub const COOKIE_THRESHOLD: u32 = 50;
pub const COOKIE_SCORE: f64 = 5.0;
pub const FINGERPRINTING_THRESHOLD: usize = 3;
pub const FINGERPRINTING_SCORE: f64 = 10.0;

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// Hosts exempt from the mixed content check
pub const MIXED_CONTENT_EXEMPT_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

pub const TRACKING_HOST_MARKERS: &[&str] = &[
    "stats.", "counter.", "track.", "click.", "pixel.", "ad.", "ads.", "banner.",
];

pub const MIXED_CONTENT_SCORE: f64 = 10.0;
pub const EXTERNAL_DOMAIN_THRESHOLD: usize = 25;
pub const EXTERNAL_DOMAIN_SCORE: f64 = 5.0;
pub const TRACKING_HOST_SCORE: f64 = 5.0;

// ---------------------------------------------------------------------------
// Social engineering
// ---------------------------------------------------------------------------

pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgent", "immediately", "alert", "warning", "limited time",
    "act now", "expires", "deadline", "critical", "important",
    "security alert", "account suspended", "verify now", "problem detected",
];

pub const FEAR_KEYWORDS: &[&str] = &[
    "risk", "danger", "threat", "vulnerable", "compromise", "hacked",
    "stolen", "breach", "attack", "victim", "scam", "fraud",
    "suspicious activity", "unauthorized", "illegal",
];

pub const REWARD_KEYWORDS: &[&str] = &[
    "congratulations", "winner", "won", "prize", "reward", "gift",
    "free", "bonus", "exclusive", "selected", "lucky", "special offer",
];

/// Lowercase substrings matched against each button label
pub const SUSPICIOUS_BUTTON_TEXT: &[&str] = &[
    "download now", "install now", "get now", "claim now", "verify now",
    "update now", "fix now", "clean now", "allow", "enable",
];

pub const URGENCY_THRESHOLD: usize = 2;
pub const FEAR_THRESHOLD: usize = 3;
pub const REWARD_THRESHOLD: usize = 3;
pub const TACTIC_SCORE: f64 = 10.0;
pub const SUSPICIOUS_BUTTON_SCORE: f64 = 5.0;
