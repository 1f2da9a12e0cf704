use crate::encoders::codec::Codec;

pub use super::errors::CodecError;

const ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'A' as usize + i] = 10 + i as u8;
        table[b'a' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

/// Uppercase hexadecimal. Decoding accepts either case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base16;

/// Alias for [`Base16`].
pub type Hex = Base16;

pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * 2);
    for &byte in data {
        result.push(ALPHABET[(byte >> 4) as usize]);
        result.push(ALPHABET[(byte & 0x0F) as usize]);
    }
    result
}

pub fn decode(encoded: &[u8]) -> Result<Vec<u8>, CodecError> {
    if encoded.len() % 2 != 0 {
        return Err(CodecError::invalid_length(
            encoded.len(),
            "an even number of hex digits",
        ));
    }

    let mut result = Vec::with_capacity(encoded.len() / 2);
    for (pair_index, pair) in encoded.chunks_exact(2).enumerate() {
        let position = pair_index * 2;
        let high = digit(encoded, position, pair[0])?;
        let low = digit(encoded, position + 1, pair[1])?;
        result.push(high << 4 | low);
    }
    Ok(result)
}

fn digit(encoded: &[u8], position: usize, byte: u8) -> Result<u8, CodecError> {
    match DECODE_TABLE[byte as usize] {
        INVALID => Err(CodecError::invalid_character(encoded, position)),
        value => Ok(value),
    }
}

impl Codec for Base16 {
    fn encode(&self, data: &[u8]) -> Vec<u8> {
        encode(data)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        let cases = [
            ("", ""),
            ("f", "66"),
            ("fo", "666F"),
            ("foo", "666F6F"),
            ("foob", "666F6F62"),
            ("fooba", "666F6F6261"),
            ("foobar", "666F6F626172"),
            ("Hello, World!", "48656C6C6F2C20576F726C6421"),
            (
                "live long and prosper",
                "6C697665206C6F6E6720616E642070726F73706572",
            ),
        ];

        for (plain, hex) in cases {
            assert_eq!(Base16.encode_str(plain), hex);
            assert_eq!(Base16.decode_str(hex).unwrap(), plain);
        }
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(Base16.decode_str("48656C6C6F").unwrap(), "Hello");
        assert_eq!(Base16.decode_str("48656c6c6f").unwrap(), "Hello");
        assert_eq!(Base16.decode_str("48656C6c6F").unwrap(), "Hello");
    }

    #[test]
    fn test_encode_is_uppercase() {
        assert_eq!(Base16.encode_to_string(&[0xab, 0xcd, 0xef]), "ABCDEF");
    }

    #[test]
    fn test_odd_length_fails() {
        let err = decode(b"ABC").unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { actual: 3, .. }));
    }

    #[test]
    fn test_invalid_character_position() {
        assert_eq!(
            decode(b"00G0").unwrap_err(),
            CodecError::InvalidCharacter {
                character: 'G',
                position: 2
            }
        );
        assert_eq!(
            decode(b"0 ").unwrap_err(),
            CodecError::InvalidCharacter {
                character: ' ',
                position: 1
            }
        );
    }

    #[test]
    fn test_all_bytes_round_trip() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data);
        assert_eq!(encoded.len(), 512);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_hex_alias() {
        let hex: Hex = Base16;
        assert_eq!(hex.encode_str("fo"), "666F");
    }
}
