//! Time recognizer: epoch seconds/milliseconds and strict ISO-8601 datetimes,
//! rendered in a fixed UTC+8 target zone with millisecond precision.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Years 2000..=2100 as Unix seconds; the millisecond range is scaled x1000.
const EPOCH_SECONDS_MIN: i64 = 946_684_800;
const EPOCH_SECONDS_MAX: i64 = 4_102_444_800;

const TARGET_OFFSET_SECONDS: i32 = 8 * 3600;

static NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10,13}$").expect("valid numeral regex"));
static ISO_8601: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})T(\d{2}:\d{2}:\d{2})(\.\d{1,3})?(Z|[+-]\d{2}:?\d{2})$")
        .expect("valid ISO-8601 regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeKind {
    Timestamp,
    Iso,
}

/// A recognized instant with its render-ready display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTime {
    pub kind: TimeKind,
    pub display: String,
}

/// Classify an integer as an epoch timestamp.
///
/// Seconds and milliseconds are disambiguated by value range, not digit
/// count; integers fitting neither range are not timestamps.
pub fn time_from_number(value: i64) -> Option<ParsedTime> {
    let millis = epoch_millis(value)?;
    let instant = Utc.timestamp_millis_opt(millis).single()?;
    Some(ParsedTime {
        kind: TimeKind::Timestamp,
        display: format_display(instant, TimeKind::Timestamp),
    })
}

/// Classify a string as a 10–13 digit epoch numeral or a strict ISO-8601
/// datetime (`YYYY-MM-DDTHH:MM:SS[.fff](Z|±HH:MM|±HHMM)`).
pub fn time_from_string(value: &str) -> Option<ParsedTime> {
    let trimmed = value.trim();

    if NUMERAL.is_match(trimmed) {
        if let Some(parsed) = trimmed.parse::<i64>().ok().and_then(time_from_number) {
            return Some(parsed);
        }
    }

    let instant = parse_iso_instant(trimmed)?;
    Some(ParsedTime {
        kind: TimeKind::Iso,
        display: format_display(instant.with_timezone(&Utc), TimeKind::Iso),
    })
}

fn epoch_millis(value: i64) -> Option<i64> {
    if (EPOCH_SECONDS_MIN..=EPOCH_SECONDS_MAX).contains(&value) {
        return Some(value * 1000);
    }
    if (EPOCH_SECONDS_MIN * 1000..=EPOCH_SECONDS_MAX * 1000).contains(&value) {
        return Some(value);
    }
    None
}

fn parse_iso_instant(text: &str) -> Option<DateTime<FixedOffset>> {
    let captures = ISO_8601.captures(text)?;
    let date = &captures[1];
    let time = &captures[2];
    let fraction = captures.get(3).map(|m| m.as_str()).unwrap_or("");

    // ±HHMM offsets get the colon the strict parser requires.
    let zone = &captures[4];
    let zone = if zone == "Z" {
        "+00:00".to_string()
    } else if zone.len() == 5 {
        format!("{}:{}", &zone[..3], &zone[3..])
    } else {
        zone.to_string()
    };

    DateTime::parse_from_rfc3339(&format!("{}T{}{}{}", date, time, fraction, zone)).ok()
}

fn target_zone() -> Option<FixedOffset> {
    FixedOffset::east_opt(TARGET_OFFSET_SECONDS)
}

/// Timestamps render as `YYYY/MM/DD HH:MM:SS.mmm`, ISO instants as
/// `UTC+8 YYYY-MM-DD HH:MM:SS.mmm`. If the target offset cannot be built the
/// local zone is used instead, keeping millisecond precision.
fn format_display(instant: DateTime<Utc>, kind: TimeKind) -> String {
    match kind {
        TimeKind::Timestamp => match target_zone() {
            Some(zone) => instant
                .with_timezone(&zone)
                .format("%Y/%m/%d %H:%M:%S%.3f")
                .to_string(),
            None => instant
                .with_timezone(&Local)
                .format("%Y/%m/%d %H:%M:%S%.3f")
                .to_string(),
        },
        TimeKind::Iso => match target_zone() {
            Some(zone) => format!(
                "UTC+8 {}",
                instant.with_timezone(&zone).format("%Y-%m-%d %H:%M:%S%.3f")
            ),
            None => instant
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S%.3f")
                .to_string(),
        },
    }
}
