pub mod algorithms;
pub mod any;
pub mod codec;

// Re-export commonly used items
pub use algorithms::{base16, base58, base64};
