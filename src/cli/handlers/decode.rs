use crate::cli::{
    args::DecodeArgs,
    config::{read_input, resolve_codec, write_output},
    global::GlobalArgs,
};
use base_codec::{Codec, CodecRegistry};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(config, args.codec.as_deref())?;

    let input = read_input(args.file.as_ref(), global)?;
    let decoded = codec.decode(input.trim_ascii())?;

    write_output(args.output.as_deref(), &decoded)
}
