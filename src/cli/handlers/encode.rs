use crate::cli::{
    args::EncodeArgs,
    config::{apply_overrides, read_input, resolve_codec, write_output},
    global::GlobalArgs,
};
use base_codec::{AnyCodec, Codec, CodecRegistry};

/// Base58 input length above which encoding cost becomes noticeable.
const BASE58_WARN_LEN: usize = 4 * 1024;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(config, args.codec.as_deref())?;
    let codec = apply_overrides(codec, &args.base64)?;

    let data = read_input(args.file.as_ref(), global)?;
    if matches!(codec, AnyCodec::Base58(_)) && data.len() > BASE58_WARN_LEN {
        tracing::warn!(
            len = data.len(),
            "base58 cost grows quadratically with input length"
        );
    }

    let mut encoded = codec.encode(&data);
    encoded.push(b'\n');
    write_output(args.output.as_deref(), &encoded)
}
