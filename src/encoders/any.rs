use serde::Deserialize;
use std::fmt;

use super::algorithms::errors::CodecError;
use super::base16::Base16;
use super::base58::Base58;
use super::base64::Base64;
use super::codec::Codec;

/// The supported encoding schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Base16,
    Base58,
    Base64,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Base16 => "base16",
            Scheme::Base58 => "base58",
            Scheme::Base64 => "base64",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A codec of any scheme, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyCodec {
    Base16(Base16),
    Base58(Base58),
    Base64(Base64),
}

impl AnyCodec {
    pub fn scheme(&self) -> Scheme {
        match self {
            AnyCodec::Base16(_) => Scheme::Base16,
            AnyCodec::Base58(_) => Scheme::Base58,
            AnyCodec::Base64(_) => Scheme::Base64,
        }
    }
}

impl From<Scheme> for AnyCodec {
    /// The scheme's default codec; Base64 uses the basic preset.
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Base16 => AnyCodec::Base16(Base16),
            Scheme::Base58 => AnyCodec::Base58(Base58),
            Scheme::Base64 => AnyCodec::Base64(Base64::standard()),
        }
    }
}

impl From<Base64> for AnyCodec {
    fn from(codec: Base64) -> Self {
        AnyCodec::Base64(codec)
    }
}

impl Codec for AnyCodec {
    fn encode(&self, data: &[u8]) -> Vec<u8> {
        match self {
            AnyCodec::Base16(codec) => codec.encode(data),
            AnyCodec::Base58(codec) => codec.encode(data),
            AnyCodec::Base64(codec) => codec.encode(data),
        }
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let result = match self {
            AnyCodec::Base16(codec) => codec.decode(data),
            AnyCodec::Base58(codec) => codec.decode(data),
            AnyCodec::Base64(codec) => codec.decode(data),
        };
        if let Err(err) = &result {
            tracing::trace!(scheme = %self.scheme(), kind = %err.kind(), "decode failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_concrete_codecs() {
        let data = b"\x00\x00any codec";
        for scheme in [Scheme::Base16, Scheme::Base58, Scheme::Base64] {
            let codec = AnyCodec::from(scheme);
            assert_eq!(codec.scheme(), scheme);
            let encoded = codec.encode(data);
            assert_eq!(codec.decode(&encoded).unwrap(), data);
        }

        assert_eq!(
            AnyCodec::from(Scheme::Base16).encode_str("foobar"),
            "666F6F626172"
        );
        assert_eq!(
            AnyCodec::from(Base64::url_safe()).encode_to_string(&[0xFB, 0xFF]),
            "-_8="
        );
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!(Scheme::Base58.to_string(), "base58");

        #[derive(Deserialize)]
        struct Doc {
            scheme: Scheme,
        }
        let doc: Doc = toml::from_str(r#"scheme = "base64""#).unwrap();
        assert_eq!(doc.scheme, Scheme::Base64);
    }
}
