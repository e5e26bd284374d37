//! Structural scanner: re-derives the character offset of every JSON path.
//!
//! A single left-to-right pass over the raw text, mirroring the decoding
//! grammar exactly so that recorded offsets line up with what a conformant
//! decoder would accept. The scanner is best-effort navigation infrastructure:
//! it never replaces the decoder as the system of record for validity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScanError;

/// One step in a structural path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// RFC 6901 escaping for a single key segment.
fn escape_pointer_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Canonical pointer encoding of a path. The empty path is the document root.
pub fn path_to_pointer(path: &[PathSegment]) -> String {
    let mut pointer = String::new();
    for segment in path {
        pointer.push('/');
        match segment {
            PathSegment::Key(key) => pointer.push_str(&escape_pointer_segment(key)),
            PathSegment::Index(index) => pointer.push_str(&index.to_string()),
        }
    }
    pointer
}

/// Read-only mapping from canonical pointer to character offset.
///
/// For object members the offset points at the opening quote of the key token,
/// for array elements and the root at the first character of the value.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PointerIndex {
    entries: HashMap<String, usize>,
}

impl PointerIndex {
    /// Offset for a canonical pointer string.
    pub fn get(&self, pointer: &str) -> Option<usize> {
        self.entries.get(pointer).copied()
    }

    /// Offset for a structural path.
    pub fn position_of(&self, path: &[PathSegment]) -> Option<usize> {
        self.get(&path_to_pointer(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(pointer, offset)| (pointer.as_str(), *offset))
    }

    /// First writer wins: a member's offset is recorded at its key token and
    /// must not be overwritten when the value itself is scanned.
    fn insert_if_absent(&mut self, pointer: String, offset: usize) {
        self.entries.entry(pointer).or_insert(offset);
    }
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    index: PointerIndex,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Scanner {
            chars: text.chars().collect(),
            pos: 0,
            index: PointerIndex::default(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.pos += 1;
        }
    }

    fn scan_value(&mut self, pointer: &str) -> Result<(), ScanError> {
        self.skip_ws();

        let start = self.pos;
        self.index.insert_if_absent(pointer.to_string(), start);

        let ch = self.peek().ok_or(ScanError::UnexpectedEnd)?;
        match ch {
            '{' => self.scan_object(pointer),
            '[' => self.scan_array(pointer),
            '"' => self.scan_string().map(|_| ()),
            '-' | '0'..='9' => self.scan_number(),
            't' => self.consume_literal("true"),
            'f' => self.consume_literal("false"),
            'n' => self.consume_literal("null"),
            _ => Err(ScanError::UnexpectedToken { token: ch, position: start }),
        }
    }

    fn scan_object(&mut self, pointer: &str) -> Result<(), ScanError> {
        self.pos += 1; // '{'
        self.skip_ws();

        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(());
        }

        loop {
            self.skip_ws();
            let key_start = self.pos;
            let key = self.scan_string()?;
            self.skip_ws();

            if self.peek() != Some(':') {
                return Err(ScanError::Expected { expected: "':'", position: self.pos });
            }
            self.pos += 1;
            self.skip_ws();

            // Member offsets point at the key token so callers can scroll to
            // `"key": ...` rather than the value.
            let child = format!("{}/{}", pointer, escape_pointer_segment(&key));
            self.index.insert_if_absent(child.clone(), key_start);

            self.scan_value(&child)?;
            self.skip_ws();

            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => {
                    return Err(ScanError::Expected { expected: "',' or '}'", position: self.pos })
                }
                None => return Err(ScanError::UnexpectedEnd),
            }
        }
    }

    fn scan_array(&mut self, pointer: &str) -> Result<(), ScanError> {
        self.pos += 1; // '['
        self.skip_ws();

        if self.peek() == Some(']') {
            self.pos += 1;
            return Ok(());
        }

        let mut index = 0usize;
        loop {
            self.skip_ws();

            // Recorded before descending so a malformed element still
            // contributes a plausible offset.
            let child = format!("{}/{}", pointer, index);
            self.index.insert_if_absent(child.clone(), self.pos);

            self.scan_value(&child)?;
            self.skip_ws();

            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                    index += 1;
                }
                Some(']') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => {
                    return Err(ScanError::Expected { expected: "',' or ']'", position: self.pos })
                }
                None => return Err(ScanError::UnexpectedEnd),
            }
        }
    }

    /// Decodes the string at the cursor and returns its character content.
    /// Only keys are ever inspected; value strings are decoded for position.
    fn scan_string(&mut self) -> Result<String, ScanError> {
        let start = self.pos;
        if self.peek() != Some('"') {
            return Err(ScanError::Expected { expected: "string", position: start });
        }
        self.pos += 1; // opening quote

        let mut out = String::new();
        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.pos += 1;
                    return Ok(out);
                }
                '\\' => {
                    self.pos += 1;
                    let escape = self.peek().ok_or(ScanError::UnterminatedString { position: start })?;
                    match escape {
                        'u' => out.push(self.scan_unicode_escape()?),
                        '"' => {
                            out.push('"');
                            self.pos += 1;
                        }
                        '\\' => {
                            out.push('\\');
                            self.pos += 1;
                        }
                        '/' => {
                            out.push('/');
                            self.pos += 1;
                        }
                        'b' => {
                            out.push('\u{0008}');
                            self.pos += 1;
                        }
                        'f' => {
                            out.push('\u{000C}');
                            self.pos += 1;
                        }
                        'n' => {
                            out.push('\n');
                            self.pos += 1;
                        }
                        'r' => {
                            out.push('\r');
                            self.pos += 1;
                        }
                        't' => {
                            out.push('\t');
                            self.pos += 1;
                        }
                        _ => return Err(ScanError::InvalidEscape { position: self.pos }),
                    }
                }
                _ => {
                    out.push(ch);
                    self.pos += 1;
                }
            }
        }

        Err(ScanError::UnterminatedString { position: start })
    }

    /// `\uXXXX`, with surrogate pairs combined. Lone surrogates are a scan
    /// error; the decoder this scanner mirrors rejects them too.
    fn scan_unicode_escape(&mut self) -> Result<char, ScanError> {
        let escape_pos = self.pos - 1; // at the backslash
        let unit = self.read_hex4()?;

        if (0xD800..=0xDBFF).contains(&unit) {
            if self.peek() == Some('\\') && self.peek_at(1) == Some('u') {
                self.pos += 2;
                let low = self.read_hex4()?;
                if (0xDC00..=0xDFFF).contains(&low) {
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(combined)
                        .ok_or(ScanError::InvalidUnicodeEscape { position: escape_pos });
                }
            }
            return Err(ScanError::InvalidUnicodeEscape { position: escape_pos });
        }
        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(ScanError::InvalidUnicodeEscape { position: escape_pos });
        }

        char::from_u32(unit).ok_or(ScanError::InvalidUnicodeEscape { position: escape_pos })
    }

    /// Reads `uXXXX` with the cursor on the `u`; leaves it past the digits.
    fn read_hex4(&mut self) -> Result<u32, ScanError> {
        let position = self.pos;
        self.pos += 1; // 'u'

        let mut value = 0u32;
        for _ in 0..4 {
            let digit = self
                .peek()
                .and_then(|c| c.to_digit(16))
                .ok_or(ScanError::InvalidUnicodeEscape { position })?;
            value = value * 16 + digit;
            self.pos += 1;
        }
        Ok(value)
    }

    /// Consumes a number by position only; the index never needs its value.
    fn scan_number(&mut self) -> Result<(), ScanError> {
        if self.peek() == Some('-') {
            self.pos += 1;
        }

        match self.peek() {
            Some('0') => self.pos += 1,
            Some('1'..='9') => {
                while matches!(self.peek(), Some('0'..='9')) {
                    self.pos += 1;
                }
            }
            _ => return Err(ScanError::InvalidNumber { position: self.pos }),
        }

        if self.peek() == Some('.') {
            self.pos += 1;
            if !matches!(self.peek(), Some('0'..='9')) {
                return Err(ScanError::InvalidNumber { position: self.pos });
            }
            while matches!(self.peek(), Some('0'..='9')) {
                self.pos += 1;
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some('+' | '-')) {
                self.pos += 1;
            }
            if !matches!(self.peek(), Some('0'..='9')) {
                return Err(ScanError::InvalidNumber { position: self.pos });
            }
            while matches!(self.peek(), Some('0'..='9')) {
                self.pos += 1;
            }
        }

        Ok(())
    }

    fn consume_literal(&mut self, literal: &'static str) -> Result<(), ScanError> {
        let position = self.pos;
        for expected in literal.chars() {
            if self.peek() != Some(expected) {
                return Err(ScanError::InvalidLiteral { position });
            }
            self.pos += 1;
        }
        Ok(())
    }
}

/// Scan the raw text and build the pointer index.
///
/// The root pointer `""` is recorded at the first non-whitespace character
/// before any descent begins. Trailing content after the root value is not
/// inspected; validity is the decoder's job.
pub fn build_pointer_index(text: &str) -> Result<PointerIndex, ScanError> {
    let mut scanner = Scanner::new(text);
    scanner.skip_ws();
    let root_start = scanner.pos;
    scanner.index.insert_if_absent(String::new(), root_start);
    scanner.scan_value("")?;

    debug!(target: "json_lens::locate", entries = scanner.index.len(), "pointer index built");
    Ok(scanner.index)
}

/// Character offset of the token for `path`, or `None` when the path is
/// absent or the text does not scan. Scan failures are swallowed: the scanner
/// is a best-effort auxiliary, not an error channel.
pub fn find_path_position(text: &str, path: &[PathSegment]) -> Option<usize> {
    let pointer = path_to_pointer(path);
    match build_pointer_index(text) {
        Ok(index) => index.get(&pointer),
        Err(error) => {
            debug!(target: "json_lens::locate", error = %error, "scan failed, position unavailable");
            None
        }
    }
}
