//! Phone, email, and hyperlink recognizers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Largest integer the decoder's double representation holds exactly (2^53-1).
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

static CN_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("valid mobile regex"));
static PLUS_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d+$").expect("valid digits regex"));
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email regex")
});

/// 11-digit mobile pattern, or an optional `+` and 7–15 digits once
/// spaces, hyphens, and parentheses are stripped.
pub fn looks_like_phone(value: &str) -> bool {
    let trimmed = value.trim();
    if CN_MOBILE.is_match(trimmed) {
        return true;
    }

    let digits: String = trimmed
        .chars()
        .filter(|&c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    if !PLUS_DIGITS.is_match(&digits) {
        return false;
    }

    let count = digits.strip_prefix('+').unwrap_or(&digits).len();
    (7..=15).contains(&count)
}

/// Numbers are phone-eligible only as non-negative safe integers whose plain
/// decimal rendering passes the string test.
pub fn number_looks_like_phone(value: &serde_json::Number) -> bool {
    match value.as_u64() {
        Some(n) if n <= MAX_SAFE_INTEGER => looks_like_phone(&n.to_string()),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEmail {
    pub address: String,
}

impl ParsedEmail {
    /// `mailto:` href for anchor rendering.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.address)
    }
}

pub fn parse_email(value: &str) -> Option<ParsedEmail> {
    let trimmed = value.trim();
    if EMAIL.is_match(trimmed) {
        Some(ParsedEmail { address: trimmed.to_string() })
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLink {
    pub href: String,
}

/// `http://`, `https://`, or `www.` (rewritten to `https://`), validated as a
/// well-formed http(s) URL. Returns the normalized absolute form.
pub fn parse_link(value: &str) -> Option<ParsedLink> {
    let trimmed = value.trim();
    let candidate = if trimmed.starts_with("www.") {
        format!("https://{}", trimmed)
    } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        return None;
    };

    let parsed = Url::parse(&candidate).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    Some(ParsedLink { href: parsed.to_string() })
}
