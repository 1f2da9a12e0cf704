//! The shared encode/decode contract.
//!
//! Every scheme implements one bytes-to-bytes primitive in each direction. The
//! remaining entry shapes are provided methods that marshal through UTF-8.

use super::algorithms::errors::CodecError;

/// A binary-to-text codec.
///
/// | Shape          | Encode                 | Decode                 |
/// |----------------|------------------------|------------------------|
/// | bytes → bytes  | [`encode`]             | [`decode`]             |
/// | str → str      | [`encode_str`]         | [`decode_str`]         |
/// | str → bytes    | [`encode_str_to_bytes`]| [`decode_str_to_bytes`]|
/// | bytes → str    | [`encode_to_string`]   | [`decode_to_string`]   |
///
/// [`encode`]: Codec::encode
/// [`decode`]: Codec::decode
/// [`encode_str`]: Codec::encode_str
/// [`decode_str`]: Codec::decode_str
/// [`encode_str_to_bytes`]: Codec::encode_str_to_bytes
/// [`decode_str_to_bytes`]: Codec::decode_str_to_bytes
/// [`encode_to_string`]: Codec::encode_to_string
/// [`decode_to_string`]: Codec::decode_to_string
pub trait Codec {
    /// Encodes `data` into ASCII text bytes.
    fn encode(&self, data: &[u8]) -> Vec<u8>;

    /// Decodes ASCII text bytes back into the original data.
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    fn encode_str(&self, data: &str) -> String {
        self.encode_to_string(data.as_bytes())
    }

    fn encode_str_to_bytes(&self, data: &str) -> Vec<u8> {
        self.encode(data.as_bytes())
    }

    fn encode_to_string(&self, data: &[u8]) -> String {
        ascii_to_string(self.encode(data))
    }

    fn decode_str(&self, data: &str) -> Result<String, CodecError> {
        self.decode_to_string(data.as_bytes())
    }

    fn decode_str_to_bytes(&self, data: &str) -> Result<Vec<u8>, CodecError> {
        self.decode(data.as_bytes())
    }

    fn decode_to_string(&self, data: &[u8]) -> Result<String, CodecError> {
        Ok(String::from_utf8(self.decode(data)?)?)
    }
}

// Encoders only ever emit ASCII, so each byte is one char.
fn ascii_to_string(bytes: Vec<u8>) -> String {
    debug_assert!(bytes.is_ascii());
    bytes.into_iter().map(char::from).collect()
}

impl<C: Codec + ?Sized> Codec for &C {
    fn encode(&self, data: &[u8]) -> Vec<u8> {
        (**self).encode(data)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        (**self).decode(data)
    }
}
