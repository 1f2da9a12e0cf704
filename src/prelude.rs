//! Convenient re-exports for common usage.
//!
//! ```
//! use base_codec::prelude::*;
//!
//! let registry = CodecRegistry::load_default().unwrap();
//! let codec = registry.build("base58").unwrap();
//! assert_eq!(codec.decode_str("2g").unwrap(), "a");
//! ```

pub use crate::{
    AnyCodec, Base16, Base58, Base64, Base64Flags, Codec, CodecError, CodecRegistry, ErrorKind,
    LineTerminator, Scheme,
};
