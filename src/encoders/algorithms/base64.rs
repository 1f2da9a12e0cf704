//! Base64 per RFC 4648 and RFC 2045.
//!
//! Encoding is configured by [`Base64`]: alphabet variant, padding and optional
//! line wrapping. Decoding is shared by every configuration and is lenient: it
//! accepts both alphabets, skips whitespace and ignores trailing padding.

use std::ops::{BitOr, BitOrAssign};

use crate::encoders::codec::Codec;

pub use super::errors::CodecError;

const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const URL_SAFE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const PADDING: u8 = b'=';

/// Maximum line length of MIME encoded output.
pub const MIME_LINE_MAX: usize = 76;

/// Character set used when encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /`
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`
    UrlSafe,
}

impl Alphabet {
    fn table(self) -> &'static [u8; 64] {
        match self {
            Alphabet::Standard => STANDARD_ALPHABET,
            Alphabet::UrlSafe => URL_SAFE_ALPHABET,
        }
    }
}

/// Separator inserted between wrapped lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineTerminator {
    #[default]
    Lf,
    Crlf,
}

impl LineTerminator {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineTerminator::Lf => b"\n",
            LineTerminator::Crlf => b"\r\n",
        }
    }
}

/// Bit flags controlling encoder output.
///
/// `DEFAULT` yields RFC 2045 style output: padded, wrapped at
/// [`MIME_LINE_MAX`] columns with `\n` line endings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Base64Flags(u32);

impl Base64Flags {
    pub const DEFAULT: Self = Self(0);
    /// Omit trailing `=` padding.
    pub const NO_PADDING: Self = Self(1);
    /// Emit everything on one line.
    pub const NO_WRAP: Self = Self(2);
    /// Terminate lines with `\r\n`. Ignored together with `NO_WRAP`.
    pub const CRLF: Self = Self(4);
    /// Use `-` and `_` in place of `+` and `/`.
    pub const URL_SAFE: Self = Self(8);

    const ALL: u32 = 0b1111;

    /// Builds flags from raw bits, dropping bits that have no meaning.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Base64Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Base64Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// An immutable Base64 encoder configuration.
///
/// # Example
///
/// ```
/// use base_codec::{Base64, Base64Flags, Codec};
///
/// assert_eq!(Base64::standard().encode_str("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
///
/// let unpadded = Base64::with_flags(Base64Flags::NO_PADDING | Base64Flags::NO_WRAP);
/// assert_eq!(unpadded.encode_str("Hello, World!"), "SGVsbG8sIFdvcmxkIQ");
/// assert_eq!(unpadded.decode_str("SGVsbG8sIFdvcmxkIQ==").unwrap(), "Hello, World!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Base64 {
    alphabet: Alphabet,
    padding: bool,
    wrap: Option<LineWrap>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LineWrap {
    line_length: usize,
    terminator: LineTerminator,
}

impl LineWrap {
    fn new(line_length: usize, terminator: LineTerminator) -> Option<Self> {
        // Whole groups only; anything under one group disables wrapping.
        let line_length = line_length / 4 * 4;
        (line_length > 0).then_some(Self {
            line_length,
            terminator,
        })
    }

    fn groups_per_line(&self) -> usize {
        self.line_length / 4
    }
}

impl Default for Base64 {
    fn default() -> Self {
        Self::standard()
    }
}

impl Base64 {
    /// Standard alphabet, padded, single line.
    pub const fn standard() -> Self {
        Self {
            alphabet: Alphabet::Standard,
            padding: true,
            wrap: None,
        }
    }

    /// URL and filename safe alphabet, padded, single line.
    pub const fn url_safe() -> Self {
        Self {
            alphabet: Alphabet::UrlSafe,
            padding: true,
            wrap: None,
        }
    }

    /// Standard alphabet, padded, wrapped at 76 columns with `\r\n`.
    pub const fn mime() -> Self {
        Self {
            alphabet: Alphabet::Standard,
            padding: true,
            wrap: Some(LineWrap {
                line_length: MIME_LINE_MAX,
                terminator: LineTerminator::Crlf,
            }),
        }
    }

    pub fn with_flags(flags: Base64Flags) -> Self {
        let terminator = if flags.contains(Base64Flags::CRLF) {
            LineTerminator::Crlf
        } else {
            LineTerminator::Lf
        };

        Self {
            alphabet: if flags.contains(Base64Flags::URL_SAFE) {
                Alphabet::UrlSafe
            } else {
                Alphabet::Standard
            },
            padding: !flags.contains(Base64Flags::NO_PADDING),
            wrap: if flags.contains(Base64Flags::NO_WRAP) {
                None
            } else {
                LineWrap::new(MIME_LINE_MAX, terminator)
            },
        }
    }

    pub fn builder() -> Base64Builder {
        Base64Builder::default()
    }

    pub fn to_builder(&self) -> Base64Builder {
        Base64Builder { config: *self }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn padding(&self) -> bool {
        self.padding
    }

    /// Effective line length (a multiple of 4), or `None` when not wrapping.
    pub fn line_length(&self) -> Option<usize> {
        self.wrap.map(|wrap| wrap.line_length)
    }

    pub fn line_terminator(&self) -> Option<LineTerminator> {
        self.wrap.map(|wrap| wrap.terminator)
    }

    /// Exact number of bytes [`Base64::encode`] produces for `input_len` bytes.
    pub fn encoded_len(&self, input_len: usize) -> usize {
        let mut len = if self.padding {
            input_len.div_ceil(3) * 4
        } else {
            let tail = input_len % 3;
            input_len / 3 * 4 + if tail == 0 { 0 } else { tail + 1 }
        };

        if let Some(wrap) = self.wrap
            && len > 0
        {
            len += (len - 1) / wrap.line_length * wrap.terminator.as_bytes().len();
        }
        len
    }

    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let map = self.alphabet.table();
        let capacity = self.encoded_len(data.len());
        let mut result = Vec::with_capacity(capacity);

        let chunks = data.chunks_exact(3);
        let remainder = chunks.remainder();
        let mut groups_left = self.wrap.map_or(0, |wrap| wrap.groups_per_line());
        let mut consumed = 0;

        for chunk in chunks {
            let (b0, b1, b2) = (chunk[0], chunk[1], chunk[2]);
            result.push(map[(b0 >> 2) as usize]);
            result.push(map[((b0 & 0x03) << 4 | b1 >> 4) as usize]);
            result.push(map[((b1 & 0x0F) << 2 | b2 >> 6) as usize]);
            result.push(map[(b2 & 0x3F) as usize]);
            consumed += 3;

            if let Some(wrap) = self.wrap {
                groups_left -= 1;
                // No terminator after the final line.
                if groups_left == 0 && consumed < data.len() {
                    groups_left = wrap.groups_per_line();
                    result.extend_from_slice(wrap.terminator.as_bytes());
                }
            }
        }

        match remainder {
            &[b0] => {
                result.push(map[(b0 >> 2) as usize]);
                result.push(map[((b0 & 0x03) << 4) as usize]);
                if self.padding {
                    result.extend_from_slice(&[PADDING, PADDING]);
                }
            }
            &[b0, b1] => {
                result.push(map[(b0 >> 2) as usize]);
                result.push(map[((b0 & 0x03) << 4 | b1 >> 4) as usize]);
                result.push(map[((b1 & 0x0F) << 2) as usize]);
                if self.padding {
                    result.push(PADDING);
                }
            }
            _ => {}
        }

        debug_assert_eq!(result.len(), capacity);
        result
    }

    /// Decodes with the lenient decoder shared by all configurations.
    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>, CodecError> {
        decode(encoded)
    }
}

/// Builder for [`Base64`], starting from the standard preset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Builder {
    config: Base64,
}

impl Base64Builder {
    pub fn url_safe(mut self, url_safe: bool) -> Self {
        self.config.alphabet = if url_safe {
            Alphabet::UrlSafe
        } else {
            Alphabet::Standard
        };
        self
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.alphabet = alphabet;
        self
    }

    pub fn padding(mut self, padding: bool) -> Self {
        self.config.padding = padding;
        self
    }

    /// Wrap lines at `line_length` columns, rounded down to a multiple of 4.
    /// Lengths below 4 disable wrapping.
    pub fn wrap(mut self, line_length: usize, terminator: LineTerminator) -> Self {
        self.config.wrap = LineWrap::new(line_length, terminator);
        self
    }

    pub fn no_wrap(mut self) -> Self {
        self.config.wrap = None;
        self
    }

    pub fn build(self) -> Base64 {
        self.config
    }
}

impl Codec for Base64 {
    fn encode(&self, data: &[u8]) -> Vec<u8> {
        Base64::encode(self, data)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        decode(data)
    }
}

/// Encodes with the standard preset.
pub fn encode(data: &[u8]) -> Vec<u8> {
    Base64::standard().encode(data)
}

pub fn encode_with_flags(data: &[u8], flags: Base64Flags) -> Vec<u8> {
    Base64::with_flags(flags).encode(data)
}

pub fn encode_str_with_flags(data: &str, flags: Base64Flags) -> String {
    Base64::with_flags(flags).encode_str(data)
}

fn is_skippable(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b'\r' | b' ')
}

/// Decodes standard, URL-safe and MIME Base64 alike.
pub fn decode(encoded: &[u8]) -> Result<Vec<u8>, CodecError> {
    let limit = encoded.len()
        - encoded
            .iter()
            .rev()
            .take_while(|&&b| b == PADDING || is_skippable(b))
            .count();

    let mut result = Vec::with_capacity(limit * 6 / 8);
    let mut word = 0u32;
    let mut in_count = 0usize;

    for (position, &byte) in encoded[..limit].iter().enumerate() {
        let bits = match byte {
            b'A'..=b'Z' => byte - b'A',
            b'a'..=b'z' => byte - b'a' + 26,
            b'0'..=b'9' => byte - b'0' + 52,
            b'+' | b'-' => 62,
            b'/' | b'_' => 63,
            b'\t' | b'\n' | b'\r' | b' ' => continue,
            _ => return Err(CodecError::invalid_character(encoded, position)),
        };

        word = word << 6 | bits as u32;
        in_count += 1;

        // Every 4 characters complete 24 bits.
        if in_count % 4 == 0 {
            result.push((word >> 16) as u8);
            result.push((word >> 8) as u8);
            result.push(word as u8);
        }
    }

    match in_count % 4 {
        1 => {
            // 6 bits cannot form a byte.
            return Err(CodecError::invalid_length(
                in_count,
                "a multiple of 4, or 2 or 3 more",
            ));
        }
        2 => {
            word <<= 12;
            result.push((word >> 16) as u8);
        }
        3 => {
            word <<= 6;
            result.push((word >> 16) as u8);
            result.push((word >> 8) as u8);
        }
        _ => {}
    }

    Ok(result)
}
