use std::fmt;
use std::string::FromUtf8Error;

/// Errors that can occur while decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Input length the scheme cannot represent
    #[error("invalid length: input is {actual} characters, expected {expected}")]
    InvalidLength { actual: usize, expected: String },
    /// A character outside the scheme's alphabet
    #[error("invalid character '{}' at position {position}", .character.escape_debug())]
    InvalidCharacter { character: char, position: usize },
    /// Structurally malformed input
    #[error("invalid format at position {position}: {reason}")]
    InvalidFormat { position: usize, reason: String },
    /// Decoded bytes requested as a string are not UTF-8
    #[error("decoded data is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Fieldless discriminant of [`CodecError`] for branching on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLength,
    InvalidCharacter,
    InvalidFormat,
    InvalidUtf8,
}

impl CodecError {
    /// Create an InvalidLength error
    pub fn invalid_length(actual: usize, expected: impl Into<String>) -> Self {
        CodecError::InvalidLength {
            actual,
            expected: expected.into(),
        }
    }

    /// Create an InvalidCharacter error for the character starting at byte `position`.
    ///
    /// Non-ASCII input is decoded back to the full character when it is valid UTF-8,
    /// otherwise U+FFFD is reported.
    pub fn invalid_character(input: &[u8], position: usize) -> Self {
        let end = (position + 4).min(input.len());
        let character = String::from_utf8_lossy(&input[position..end])
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        CodecError::InvalidCharacter {
            character,
            position,
        }
    }

    /// Create an InvalidFormat error
    pub fn invalid_format(position: usize, reason: impl Into<String>) -> Self {
        CodecError::InvalidFormat {
            position,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidLength { .. } => ErrorKind::InvalidLength,
            CodecError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            CodecError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            CodecError::InvalidUtf8(_) => ErrorKind::InvalidUtf8,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidLength => "invalid_length",
            ErrorKind::InvalidCharacter => "invalid_character",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::InvalidUtf8 => "invalid_utf8",
        };
        f.write_str(name)
    }
}

/// Error when a codec profile is not found
#[derive(Debug, thiserror::Error)]
#[error("codec '{name}' not found{}", .suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
pub struct CodecNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CodecNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching profile name
pub fn find_closest_codec(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.cmp(b)))
        .map(|(_, candidate)| candidate.clone())
}
