//! Value classification engine.
//!
//! Runs every enabled recognizer over a decoded leaf value, collects all
//! matching tags, and selects one primary tag by fixed priority. Multiple
//! semantic readings can be simultaneously true; the priority order exists
//! because the consuming UI shows a single inline badge.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::color::{self, Rgba};
use crate::contact::{looks_like_phone, number_looks_like_phone, parse_email, parse_link};
use crate::image::parse_base64_image;
use crate::time::{time_from_number, time_from_string, TimeKind};

/// Interpretation of bare 8-digit hex colors. The textual form alone is
/// genuinely ambiguous; consumers choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexAlphaFormat {
    #[default]
    Rgba,
    Argb,
}

/// Per-recognizer enable flags. Persistence belongs to the embedding
/// application; this is plain configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionConfig {
    pub phone: bool,
    pub time: bool,
    pub email: bool,
    pub link: bool,
    pub color: bool,
    pub image: bool,
    pub hex_alpha: HexAlphaFormat,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        RecognitionConfig {
            phone: true,
            time: true,
            email: true,
            link: true,
            color: true,
            image: true,
            hex_alpha: HexAlphaFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Image,
    Time,
    Color,
    Phone,
    Link,
    Email,
}

/// Fixed display priority. An explicit ordered list, not an accident of
/// insertion order.
const PRIORITY: [TagKind; 6] = [
    TagKind::Image,
    TagKind::Time,
    TagKind::Color,
    TagKind::Phone,
    TagKind::Link,
    TagKind::Email,
];

/// One semantic reading of a leaf value, with its render-ready payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ValueTag {
    Phone,
    Time { time_kind: TimeKind, display: String },
    Link { href: String },
    Email { address: String },
    Image { mime: String, data_url: String },
    Color { raw: String, css_text: String, text_color: String, rgba: Rgba },
}

impl ValueTag {
    pub fn kind(&self) -> TagKind {
        match self {
            ValueTag::Phone => TagKind::Phone,
            ValueTag::Time { .. } => TagKind::Time,
            ValueTag::Link { .. } => TagKind::Link,
            ValueTag::Email { .. } => TagKind::Email,
            ValueTag::Image { .. } => TagKind::Image,
            ValueTag::Color { .. } => TagKind::Color,
        }
    }
}

/// All matching tags for a string value, in discovery order.
pub fn string_tags(value: &str, config: &RecognitionConfig) -> Vec<ValueTag> {
    let mut tags = Vec::new();

    if config.image {
        if let Some(image) = parse_base64_image(value) {
            tags.push(ValueTag::Image { mime: image.mime, data_url: image.data_url });
        }
    }
    if config.phone && looks_like_phone(value) {
        tags.push(ValueTag::Phone);
    }
    if config.time {
        if let Some(time) = time_from_string(value) {
            tags.push(ValueTag::Time { time_kind: time.kind, display: time.display });
        }
    }
    if config.email {
        if let Some(email) = parse_email(value) {
            tags.push(ValueTag::Email { address: email.address });
        }
    }
    if config.link {
        if let Some(link) = parse_link(value) {
            tags.push(ValueTag::Link { href: link.href });
        }
    }
    if config.color {
        if let Some(tag) = color_tag(value, config.hex_alpha) {
            tags.push(tag);
        }
    }

    tags
}

/// All matching tags for a number value: phone and time only.
pub fn number_tags(value: &serde_json::Number, config: &RecognitionConfig) -> Vec<ValueTag> {
    let mut tags = Vec::new();

    if config.phone && number_looks_like_phone(value) {
        tags.push(ValueTag::Phone);
    }
    if config.time {
        if let Some(time) = value.as_i64().and_then(time_from_number) {
            tags.push(ValueTag::Time { time_kind: time.kind, display: time.display });
        }
    }

    tags
}

/// Classify any decoded value. Only string and number leaves carry tags.
pub fn classify(value: &Value, config: &RecognitionConfig) -> Vec<ValueTag> {
    let tags = match value {
        Value::String(s) => string_tags(s, config),
        Value::Number(n) => number_tags(n, config),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => Vec::new(),
    };
    trace!(target: "json_lens::tags", count = tags.len(), "value classified");
    tags
}

/// Primary tag by fixed priority (image > time > color > phone > link >
/// email), falling back to the first tag in discovery order.
pub fn pick_primary(tags: &[ValueTag]) -> Option<&ValueTag> {
    if tags.is_empty() {
        return None;
    }
    for kind in PRIORITY {
        if let Some(tag) = tags.iter().find(|t| t.kind() == kind) {
            return Some(tag);
        }
    }
    tags.first()
}

fn color_tag(value: &str, hex_alpha: HexAlphaFormat) -> Option<ValueTag> {
    let raw = value.trim();
    let parsed = color::parse_color(raw)?;

    // Bare 8-digit hex re-reads the same digits under the configured
    // interpretation.
    let rgba = match hex_alpha {
        HexAlphaFormat::Argb if is_hex8(raw) => color::parse_hex8_aarrggbb(raw)?,
        _ => parsed,
    };

    Some(ValueTag::Color {
        raw: raw.to_string(),
        css_text: color::to_css_text(&rgba),
        text_color: color::contrasting_text_color(&rgba).to_string(),
        rgba,
    })
}

fn is_hex8(text: &str) -> bool {
    text.len() == 9
        && text.starts_with('#')
        && text[1..].chars().all(|c| c.is_ascii_hexdigit())
}
