use thiserror::Error;

/// Grammar violation raised by the structural scanner.
///
/// Positions are character offsets into the scanned text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected token '{token}' at {position}")]
    UnexpectedToken { token: char, position: usize },
    #[error("expected {expected} at {position}")]
    Expected { expected: &'static str, position: usize },
    #[error("unterminated string starting at {position}")]
    UnterminatedString { position: usize },
    #[error("invalid escape at {position}")]
    InvalidEscape { position: usize },
    #[error("invalid unicode escape at {position}")]
    InvalidUnicodeEscape { position: usize },
    #[error("invalid number at {position}")]
    InvalidNumber { position: usize },
    #[error("invalid literal at {position}")]
    InvalidLiteral { position: usize },
}

/// Decode failure from the JSON decoder, with a best-effort character
/// position re-derived from the decoder's own message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeFailure {
    pub message: String,
    pub position: Option<usize>,
}
