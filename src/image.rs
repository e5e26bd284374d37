//! Base64 raster image sniffing.
//!
//! Accepts a full `data:image/...;base64,` URL or a bare payload classified
//! strictly by magic-byte prefix. Output is always a normalized,
//! fully-prefixed data URL.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shortest payload accepted; rejects ordinary text masquerading as base64.
const MIN_PAYLOAD_LEN: usize = 64;

/// Base64 encodings of known raster magic bytes.
const MAGIC_PREFIXES: &[(&str, &str)] = &[
    ("iVBORw0KGgo", "png"),
    ("/9j/", "jpeg"),
    ("R0lGOD", "gif"),
    ("UklGR", "webp"),
    ("Qk", "bmp"),
    ("AAABAA", "x-icon"),
];

static BASE64_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").expect("valid base64 regex"));
static DATA_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/([a-zA-Z0-9.+-]+);base64,([A-Za-z0-9+/=]+)$")
        .expect("valid data URL regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBase64Image {
    pub mime: String,
    pub data_url: String,
}

/// Length ≥ 64, a multiple of 4, base64 alphabet with at most two trailing
/// `=` padding characters.
pub fn looks_like_base64_payload(value: &str) -> bool {
    value.len() >= MIN_PAYLOAD_LEN && value.len() % 4 == 0 && BASE64_PAYLOAD.is_match(value)
}

pub fn parse_base64_image(value: &str) -> Option<ParsedBase64Image> {
    let trimmed = value.trim();

    if let Some(captures) = DATA_URL.captures(trimmed) {
        let payload = captures.get(2).map(|m| m.as_str())?;
        if !looks_like_base64_payload(payload) {
            return None;
        }
        let mime = format!("image/{}", &captures[1]);
        return Some(ParsedBase64Image {
            data_url: format!("data:{};base64,{}", mime, payload),
            mime,
        });
    }

    if !looks_like_base64_payload(trimmed) {
        return None;
    }
    let subtype = MAGIC_PREFIXES
        .iter()
        .find_map(|(prefix, subtype)| trimmed.starts_with(prefix).then_some(*subtype))?;
    let mime = format!("image/{}", subtype);
    Some(ParsedBase64Image {
        data_url: format!("data:{};base64,{}", mime, trimmed),
        mime,
    })
}
