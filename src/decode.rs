//! Decode outcome: decoding is delegated to the standard decoder; this module
//! only re-derives the failure position from the decoder's own message text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::error::DecodeFailure;

static LINE_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"line (\d+) column (\d+)").expect("valid line/column regex"));

/// Decode `text`, reporting failures with a best-effort character position.
pub fn try_parse_json(text: &str) -> Result<Value, DecodeFailure> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(error) => {
            let message = error.to_string();
            let position = extract_error_position(&message, text);
            debug!(target: "json_lens::decode", position = ?position, "decode failed");
            Err(DecodeFailure { message, position })
        }
    }
}

/// Character position extracted from a decoder message of the
/// `... at line L column C` form.
///
/// The reported column counts bytes within the line; the result is converted
/// to a character offset into `text` and clamped to its length. Messages
/// carrying no position yield `None`.
pub fn extract_error_position(message: &str, text: &str) -> Option<usize> {
    let captures = LINE_COLUMN.captures(message)?;
    let line: usize = captures[1].parse().ok()?;
    let column: usize = captures[2].parse().ok()?;
    if line == 0 || column == 0 {
        return None;
    }

    let mut line_start = 0usize;
    for _ in 1..line {
        match text[line_start..].find('\n') {
            Some(newline) => line_start += newline + 1,
            None => break,
        }
    }

    let byte_pos = (line_start + column - 1).min(text.len());
    let char_pos = text.char_indices().take_while(|(i, _)| *i < byte_pos).count();
    Some(char_pos)
}
