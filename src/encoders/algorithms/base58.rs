//! Bitcoin-style Base58.
//!
//! The conversion treats the input as one big-endian number and re-expresses it
//! digit by digit, carrying through the whole working buffer for every input
//! symbol. That is O(n²) in the input length. Base58 is meant for short
//! identifiers such as keys and hashes; do not feed it bulk data.

use crate::encoders::codec::Codec;

pub use super::errors::CodecError;

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const ENCODED_ZERO: u8 = ALPHABET[0];

const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Bitcoin alphabet Base58 (no `0`, `O`, `I` or `l`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base58;

pub fn encode(data: &[u8]) -> Vec<u8> {
    let zeroes = data.iter().take_while(|&&b| b == 0).count();
    let data = &data[zeroes..];

    // log(256) / log(58), rounded up.
    let size = data.len() * 138 / 100 + 1;
    let mut b58 = vec![0u8; size];
    let mut length = 0;

    for &byte in data {
        let mut carry = byte as u32;
        let mut i = 0;
        for digit in b58.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 256 * *digit as u32;
            *digit = (carry % 58) as u8;
            carry /= 58;
            i += 1;
        }
        debug_assert_eq!(carry, 0);
        length = i;
    }

    let digits = &b58[size - length..];
    let significant = digits.iter().skip_while(|&&d| d == 0);

    let mut result = Vec::with_capacity(zeroes + length);
    result.resize(zeroes, ENCODED_ZERO);
    result.extend(significant.map(|&d| ALPHABET[d as usize]));
    result
}

pub fn decode(encoded: &[u8]) -> Result<Vec<u8>, CodecError> {
    let end = encoded.len();
    let mut pos = encoded
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();

    let mut zeroes = 0;
    while pos < end && encoded[pos] == ENCODED_ZERO {
        zeroes += 1;
        pos += 1;
    }

    // log(58) / log(256), rounded up.
    let size = (end - pos) * 733 / 1000 + 1;
    let mut b256 = vec![0u8; size];
    let mut length = 0;

    while pos < end && !encoded[pos].is_ascii_whitespace() {
        let mut carry = match DECODE_TABLE[encoded[pos] as usize] {
            INVALID => return Err(CodecError::invalid_character(encoded, pos)),
            value => value as u32,
        };
        let mut i = 0;
        for byte in b256.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 58 * *byte as u32;
            *byte = (carry % 256) as u8;
            carry /= 256;
            i += 1;
        }
        debug_assert_eq!(carry, 0);
        length = i;
        pos += 1;
    }

    let content_end = pos;
    while pos < end && encoded[pos].is_ascii_whitespace() {
        pos += 1;
    }
    if pos != end {
        return Err(CodecError::invalid_format(
            content_end,
            "unexpected data after whitespace",
        ));
    }

    let bytes = &b256[size - length..];
    let significant = bytes.iter().skip_while(|&&b| b == 0);

    let mut result = Vec::with_capacity(zeroes + length);
    result.resize(zeroes, 0);
    result.extend(significant);
    Ok(result)
}

impl Codec for Base58 {
    fn encode(&self, data: &[u8]) -> Vec<u8> {
        encode(data)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        decode(data)
    }
}
