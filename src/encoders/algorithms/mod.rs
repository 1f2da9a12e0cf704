pub mod base16;
pub mod base58;
pub mod base64;
pub mod errors;

// Re-export error types for public API
pub use errors::{CodecError, CodecNotFoundError, ErrorKind, find_closest_codec};
