use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Codec profile to encode with (default from settings)
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub base64: Base64Overrides,
}

/// Base64 output options layered over the selected profile
#[derive(Args, Debug, Default)]
pub struct Base64Overrides {
    /// Omit '=' padding
    #[arg(long)]
    pub no_padding: bool,

    /// Use the URL and filename safe alphabet
    #[arg(long)]
    pub url_safe: bool,

    /// Wrap lines at N columns (rounded down to a multiple of 4)
    #[arg(long, value_name = "N", conflicts_with = "no_wrap")]
    pub wrap: Option<usize>,

    /// Emit a single line
    #[arg(long)]
    pub no_wrap: bool,

    /// Terminate wrapped lines with CRLF
    #[arg(long)]
    pub crlf: bool,

    /// Raw flag bits (NO_PADDING=1, NO_WRAP=2, CRLF=4, URL_SAFE=8); replaces the profile
    #[arg(long, value_name = "BITS", conflicts_with_all = ["no_padding", "url_safe", "wrap", "no_wrap", "crlf"])]
    pub flags: Option<u32>,
}

impl Base64Overrides {
    pub fn is_empty(&self) -> bool {
        !self.no_padding
            && !self.url_safe
            && self.wrap.is_none()
            && !self.no_wrap
            && !self.crlf
            && self.flags.is_none()
    }
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Codec profile to decode from (default from settings)
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode binary data to text
    Encode(EncodeArgs),
    /// Decode text back to binary data
    Decode(DecodeArgs),
    /// List available codec profiles
    List,
}
