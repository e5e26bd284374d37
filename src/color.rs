//! Color codec: five textual notations parsed to a canonical RGBA tuple,
//! render-ready css/hex text, and perceptual text contrast.
//!
//! Notations are tried in a fixed order because some are syntactic subsets of
//! others. The `0x`-prefixed 8-digit form is AARRGGBB while the `#`-prefixed
//! 8-digit form is RRGGBBAA; the asymmetry is deliberate and both readings of
//! the same `#` digits are exposed to callers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("valid hex color regex")
});
static HEX_0X: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]{8}$").expect("valid 0x color regex"));
static RGB_FUNC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*([\d.]+)\s*,\s*([\d.]+)\s*,\s*([\d.]+)(?:\s*,\s*([\d.]+))?\s*\)$")
        .expect("valid rgb() regex")
});
static HSL_FUNC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^hsla?\(\s*([\d.]+)\s*,\s*([\d.]+)%\s*,\s*([\d.]+)%(?:\s*,\s*([\d.]+))?\s*\)$")
        .expect("valid hsl() regex")
});

/// Canonical color value: byte channels plus unit-interval alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgba { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba::new(r, g, b, 1.0)
    }
}

/// Parse any recognized notation into canonical RGBA.
///
/// Order matters: `0xAARRGGBB` first, then `#` hex (8 digits read as
/// RRGGBBAA), then `rgb()`/`rgba()`, then `hsl()`/`hsla()`.
pub fn parse_color(text: &str) -> Option<Rgba> {
    let trimmed = text.trim();
    parse_hex0x_aarrggbb(trimmed)
        .or_else(|| parse_hex(trimmed))
        .or_else(|| parse_rgb_function(trimmed))
        .or_else(|| parse_hsl_function(trimmed))
}

/// `0x`/`0X` + exactly 8 hex digits, read unambiguously as AARRGGBB.
pub fn parse_hex0x_aarrggbb(text: &str) -> Option<Rgba> {
    if !HEX_0X.is_match(text) {
        return None;
    }
    let digits = &text[2..];
    let a = hex_byte(&digits[0..2])? as f64 / 255.0;
    let r = hex_byte(&digits[2..4])?;
    let g = hex_byte(&digits[4..6])?;
    let b = hex_byte(&digits[6..8])?;
    Some(Rgba::new(r, g, b, a))
}

/// `#` + 3/4/6/8 hex digits. Short forms duplicate each nibble; 4- and
/// 8-digit forms carry trailing alpha (RRGGBBAA).
pub fn parse_hex(text: &str) -> Option<Rgba> {
    if !HEX.is_match(text) {
        return None;
    }
    let digits = &text[1..];
    match digits.len() {
        3 => {
            let r = hex_nibble_pair(digits, 0)?;
            let g = hex_nibble_pair(digits, 1)?;
            let b = hex_nibble_pair(digits, 2)?;
            Some(Rgba::opaque(r, g, b))
        }
        4 => {
            let r = hex_nibble_pair(digits, 0)?;
            let g = hex_nibble_pair(digits, 1)?;
            let b = hex_nibble_pair(digits, 2)?;
            let a = hex_nibble_pair(digits, 3)? as f64 / 255.0;
            Some(Rgba::new(r, g, b, a))
        }
        6 => {
            let r = hex_byte(&digits[0..2])?;
            let g = hex_byte(&digits[2..4])?;
            let b = hex_byte(&digits[4..6])?;
            Some(Rgba::opaque(r, g, b))
        }
        8 => parse_hex8_rrggbbaa(text),
        _ => None,
    }
}

/// Read `#RRGGBBAA` digits with trailing alpha.
pub fn parse_hex8_rrggbbaa(text: &str) -> Option<Rgba> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = hex_byte(&digits[0..2])?;
    let g = hex_byte(&digits[2..4])?;
    let b = hex_byte(&digits[4..6])?;
    let a = hex_byte(&digits[6..8])? as f64 / 255.0;
    Some(Rgba::new(r, g, b, a))
}

/// Read the same 8 digits with leading alpha (`#AARRGGBB`). The textual form
/// alone cannot distinguish the two; callers choose.
pub fn parse_hex8_aarrggbb(text: &str) -> Option<Rgba> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let a = hex_byte(&digits[0..2])? as f64 / 255.0;
    let r = hex_byte(&digits[2..4])?;
    let g = hex_byte(&digits[4..6])?;
    let b = hex_byte(&digits[6..8])?;
    Some(Rgba::new(r, g, b, a))
}

/// `rgb()`/`rgba()` with channels in [0,255] and optional alpha in [0,1].
pub fn parse_rgb_function(text: &str) -> Option<Rgba> {
    let captures = RGB_FUNC.captures(text)?;
    let r: f64 = captures[1].parse().ok()?;
    let g: f64 = captures[2].parse().ok()?;
    let b: f64 = captures[3].parse().ok()?;
    if ![r, g, b].iter().all(|n| (0.0..=255.0).contains(n)) {
        return None;
    }

    let a = match captures.get(4) {
        Some(alpha) => {
            let a: f64 = alpha.as_str().parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            a
        }
        None => 1.0,
    };

    Some(Rgba::new(r.round() as u8, g.round() as u8, b.round() as u8, a))
}

/// `hsl()`/`hsla()` with hue normalized modulo 360 and s/l percentages.
pub fn parse_hsl_function(text: &str) -> Option<Rgba> {
    let captures = HSL_FUNC.captures(text)?;
    let h: f64 = captures[1].parse().ok()?;
    let s: f64 = captures[2].parse().ok()?;
    let l: f64 = captures[3].parse().ok()?;
    if !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&l) {
        return None;
    }

    let a = match captures.get(4) {
        Some(alpha) => {
            let a: f64 = alpha.as_str().parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            a
        }
        None => 1.0,
    };

    let (r, g, b) = hsl_to_rgb(h.rem_euclid(360.0), s / 100.0, l / 100.0);
    Some(Rgba::new(r, g, b, a))
}

/// Standard chroma / hue-prime / intermediate decomposition.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = if hp < 1.0 {
        (c, x, 0.0)
    } else if hp < 2.0 {
        (x, c, 0.0)
    } else if hp < 3.0 {
        (0.0, c, x)
    } else if hp < 4.0 {
        (0.0, x, c)
    } else if hp < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

/// Canonical css text: `rgba(r, g, b, a)` with alpha rounded to 3 decimals,
/// trailing zeros trimmed.
pub fn to_css_text(color: &Rgba) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, format_alpha(color.a))
}

/// CSS hex text with alpha: `#RRGGBBAA`, uppercase.
pub fn to_hex_text(color: &Rgba) -> String {
    let alpha = (color.a * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02X}{:02X}{:02X}{:02X}", color.r, color.g, color.b, alpha)
}

/// Light or dark text for use over `color`, by relative luminance.
/// Non-gamma-corrected heuristic: good enough for UI tagging, not
/// colorimetrically exact.
pub fn contrasting_text_color(color: &Rgba) -> &'static str {
    let luminance =
        (0.2126 * color.r as f64 + 0.7152 * color.g as f64 + 0.0722 * color.b as f64) / 255.0;
    if luminance < 0.5 {
        "#ffffff"
    } else {
        "#111827"
    }
}

fn format_alpha(alpha: f64) -> String {
    let rounded = (alpha * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

fn hex_byte(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}

fn hex_nibble_pair(digits: &str, index: usize) -> Option<u8> {
    let nibble = digits.as_bytes().get(index).copied()?;
    let value = (nibble as char).to_digit(16)? as u8;
    Some(value * 17)
}
