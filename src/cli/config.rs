use base_codec::{AnyCodec, Base64, Base64Flags, CodecRegistry, LineTerminator};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::args::Base64Overrides;
use super::global::GlobalArgs;

/// Loads profiles from the standard locations plus any `--config` file.
pub fn load_registry(global: &GlobalArgs) -> Result<CodecRegistry, Box<dyn std::error::Error>> {
    let mut registry = CodecRegistry::load_with_overrides()?;
    if let Some(path) = global.config_path() {
        let extra = CodecRegistry::load_from_file(&path)
            .map_err(|e| format!("Cannot load config '{}': {}", path.display(), e))?;
        registry.merge(extra);
    }
    Ok(registry)
}

/// Builds the named profile, falling back to the configured default.
pub fn resolve_codec(
    registry: &CodecRegistry,
    name: Option<&str>,
) -> Result<AnyCodec, Box<dyn std::error::Error>> {
    let name = match name {
        Some(name) => name,
        None => registry
            .settings
            .default_codec
            .as_deref()
            .ok_or("No codec given and no default_codec configured")?,
    };
    Ok(registry.build(name)?)
}

/// Layers command line Base64 options over a resolved codec.
pub fn apply_overrides(
    codec: AnyCodec,
    overrides: &Base64Overrides,
) -> Result<AnyCodec, Box<dyn std::error::Error>> {
    if overrides.is_empty() {
        return Ok(codec);
    }
    let AnyCodec::Base64(base) = codec else {
        return Err(format!(
            "Base64 options do not apply to {} codecs",
            codec.scheme()
        )
        .into());
    };

    if let Some(bits) = overrides.flags {
        return Ok(Base64::with_flags(Base64Flags::from_bits_truncate(bits)).into());
    }

    let mut builder = base.to_builder();
    if overrides.no_padding {
        builder = builder.padding(false);
    }
    if overrides.url_safe {
        builder = builder.url_safe(true);
    }

    let terminator = if overrides.crlf {
        LineTerminator::Crlf
    } else {
        base.line_terminator().unwrap_or(LineTerminator::Lf)
    };
    if overrides.no_wrap {
        builder = builder.no_wrap();
    } else if let Some(len) = overrides.wrap {
        builder = builder.wrap(len, terminator);
    } else if overrides.crlf {
        let len = base
            .line_length()
            .ok_or("--crlf requires --wrap or a wrapped profile")?;
        builder = builder.wrap(len, terminator);
    }

    Ok(builder.build().into())
}

/// Reads the input file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;
            if file_size > global.max_size {
                if !global.force {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
                tracing::warn!(
                    size = file_size,
                    limit = global.max_size,
                    "processing large file"
                );
            }
        }
        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
            buffer.len(),
            global.max_size
        )
        .into());
    }
    Ok(buffer)
}

/// Writes to the output file, or stdout when none is given.
pub fn write_output(output: Option<&Path>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base_codec::{Base16, Codec};

    #[test]
    fn test_overrides_rejected_for_other_schemes() {
        let overrides = Base64Overrides {
            no_padding: true,
            ..Default::default()
        };
        let err = apply_overrides(AnyCodec::Base16(Base16), &overrides).unwrap_err();
        assert!(err.to_string().contains("base16"));
    }

    #[test]
    fn test_crlf_keeps_profile_line_length() {
        let overrides = Base64Overrides {
            crlf: true,
            ..Default::default()
        };
        let codec = apply_overrides(
            Base64::builder().wrap(8, LineTerminator::Lf).build().into(),
            &overrides,
        )
        .unwrap();
        assert_eq!(codec.encode_to_string(&[0u8; 9]), "AAAAAAAA\r\nAAAA");

        assert!(apply_overrides(Base64::standard().into(), &overrides).is_err());
    }

    #[test]
    fn test_flags_replace_profile() {
        let overrides = Base64Overrides {
            flags: Some(Base64Flags::NO_PADDING.bits() | Base64Flags::URL_SAFE.bits()),
            ..Default::default()
        };
        let codec = apply_overrides(Base64::mime().into(), &overrides).unwrap();
        assert_eq!(codec.encode_to_string(&[0xFB, 0xFF]), "-_8");
    }
}
