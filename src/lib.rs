//! Binary-to-text codecs: Base16, Base58 and Base64.
//!
//! Every codec implements [`Codec`], which exposes one bytes-to-bytes
//! primitive per direction plus string-shaped wrappers around it.
//!
//! ```
//! use base_codec::{Base16, Base58, Base64, Codec};
//!
//! assert_eq!(Base16.encode_str("foobar"), "666F6F626172");
//! assert_eq!(Base58.encode_str("Hello, World!"), "72k1xXWG59fYdzSNoA");
//! assert_eq!(Base64::standard().decode_str("SGVsbG8sIFdvcmxkIQ").unwrap(), "Hello, World!");
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::config::{
    AlphabetVariant, CodecConfig, CodecRegistry, InvalidProfileError, ResolveError, Settings,
    TerminatorStyle,
};
pub use crate::encoders::algorithms::{
    CodecError, CodecNotFoundError, ErrorKind, find_closest_codec,
};
pub use crate::encoders::any::{AnyCodec, Scheme};
pub use crate::encoders::base16::{self, Base16, Hex};
pub use crate::encoders::base58::{self, Base58};
pub use crate::encoders::base64::{
    self, Alphabet, Base64, Base64Builder, Base64Flags, LineTerminator, MIME_LINE_MAX,
};
pub use crate::encoders::codec::Codec;
