use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::encoders::algorithms::errors::{CodecNotFoundError, find_closest_codec};
use crate::encoders::any::{AnyCodec, Scheme};
use crate::encoders::base64::{Alphabet, Base64, LineTerminator};

/// Alphabet variant as written in TOML.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlphabetVariant {
    Standard,
    #[serde(alias = "url")]
    UrlSafe,
}

impl From<AlphabetVariant> for Alphabet {
    fn from(variant: AlphabetVariant) -> Self {
        match variant {
            AlphabetVariant::Standard => Alphabet::Standard,
            AlphabetVariant::UrlSafe => Alphabet::UrlSafe,
        }
    }
}

/// Line terminator as written in TOML.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TerminatorStyle {
    #[default]
    Lf,
    Crlf,
}

impl From<TerminatorStyle> for LineTerminator {
    fn from(style: TerminatorStyle) -> Self {
        match style {
            TerminatorStyle::Lf => LineTerminator::Lf,
            TerminatorStyle::Crlf => LineTerminator::Crlf,
        }
    }
}

/// Configuration for a single codec profile loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// The encoding scheme
    pub scheme: Scheme,
    /// Base64 alphabet variant (default: standard)
    #[serde(default)]
    pub alphabet: Option<AlphabetVariant>,
    /// Whether Base64 output is padded with '=' (default: true)
    #[serde(default)]
    pub padding: Option<bool>,
    /// Base64 line length; absent means a single line
    #[serde(default)]
    pub wrap: Option<usize>,
    /// Base64 line terminator (default: lf)
    #[serde(default)]
    pub line_terminator: Option<TerminatorStyle>,
    /// Human readable summary shown by `list`
    #[serde(default)]
    pub description: Option<String>,
}

/// A profile that cannot be turned into a codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid codec profile: {0}")]
pub struct InvalidProfileError(pub String);

impl CodecConfig {
    /// A profile for `scheme` with every option left at its default.
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            alphabet: None,
            padding: None,
            wrap: None,
            line_terminator: None,
            description: None,
        }
    }

    /// Builds the codec this profile describes.
    ///
    /// Base64 options on any other scheme are rejected rather than ignored.
    pub fn build(&self) -> Result<AnyCodec, InvalidProfileError> {
        match self.scheme {
            Scheme::Base64 => {
                let mut builder = Base64::builder()
                    .alphabet(self.alphabet.map(Alphabet::from).unwrap_or_default())
                    .padding(self.padding.unwrap_or(true));
                if let Some(line_length) = self.wrap {
                    if line_length < 4 {
                        return Err(InvalidProfileError(format!(
                            "wrap must be at least 4, got {line_length}"
                        )));
                    }
                    let terminator = self.line_terminator.unwrap_or_default().into();
                    builder = builder.wrap(line_length, terminator);
                } else if self.line_terminator.is_some() {
                    return Err(InvalidProfileError(
                        "line_terminator requires wrap".to_string(),
                    ));
                }
                Ok(AnyCodec::Base64(builder.build()))
            }
            scheme => {
                let base64_only = [
                    ("alphabet", self.alphabet.is_some()),
                    ("padding", self.padding.is_some()),
                    ("wrap", self.wrap.is_some()),
                    ("line_terminator", self.line_terminator.is_some()),
                ];
                if let Some((field, _)) = base64_only.iter().find(|(_, set)| *set) {
                    return Err(InvalidProfileError(format!(
                        "'{field}' only applies to base64, not {scheme}"
                    )));
                }
                Ok(AnyCodec::from(scheme))
            }
        }
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Profile used when none is given on the command line
    #[serde(default)]
    pub default_codec: Option<String>,
}

/// Collection of codec profiles loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct CodecRegistry {
    /// Map of profile names to their configurations
    pub codecs: HashMap<String, CodecConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Failure to resolve a profile into a codec.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    NotFound(#[from] CodecNotFoundError),
    #[error("codec '{name}': {source}")]
    Invalid {
        name: String,
        source: InvalidProfileError,
    },
}

impl CodecRegistry {
    /// Parses codec profiles from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in profiles.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../codecs.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in profiles
    /// 2. `~/.config/base-codec/codecs.toml` (user overrides)
    /// 3. `./codecs.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching profile names.
    /// Files that fail to parse are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-codec").join("codecs.toml");
            config.merge_file_if_exists(&user_config_path);
        }

        config.merge_file_if_exists(Path::new("codecs.toml"));

        Ok(config)
    }

    fn merge_file_if_exists(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(path = %path.display(), "loaded codec overrides");
                self.merge(overrides);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load codec config");
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Profiles from `other` replace same-named profiles in `self`; a default
    /// codec set in `other` wins.
    pub fn merge(&mut self, other: CodecRegistry) {
        self.codecs.extend(other.codecs);
        if other.settings.default_codec.is_some() {
            self.settings.default_codec = other.settings.default_codec;
        }
    }

    /// Retrieves a profile by name.
    pub fn get_codec(&self, name: &str) -> Option<&CodecConfig> {
        self.codecs.get(name)
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds the codec for the named profile.
    pub fn build(&self, name: &str) -> Result<AnyCodec, ResolveError> {
        let config = self.get_codec(name).ok_or_else(|| {
            let available: Vec<String> = self.codecs.keys().cloned().collect();
            CodecNotFoundError::new(name, find_closest_codec(name, &available))
        })?;

        let codec = config.build().map_err(|source| ResolveError::Invalid {
            name: name.to_string(),
            source,
        })?;
        tracing::debug!(name, scheme = %codec.scheme(), "built codec");
        Ok(codec)
    }
}

impl fmt::Display for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scheme)?;
        if let Some(description) = &self.description {
            write!(f, "  {description}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::base16::Base16;
    use crate::encoders::base58::Base58;
    use crate::encoders::base64::{Base64Flags, MIME_LINE_MAX};

    fn registry(toml: &str) -> CodecRegistry {
        CodecRegistry::from_toml(toml).unwrap()
    }

    #[test]
    fn test_load_default_config() {
        let config = CodecRegistry::load_default().unwrap();
        for name in [
            "base16",
            "hex",
            "base58",
            "base64",
            "base64url",
            "base64url_nopad",
            "base64_nopad",
            "mime",
            "rfc2045",
        ] {
            assert!(config.get_codec(name).is_some(), "missing {name}");
            assert!(config.build(name).is_ok(), "cannot build {name}");
        }
    }

    #[test]
    fn test_builtin_profiles_match_presets() {
        let config = CodecRegistry::load_default().unwrap();
        assert_eq!(config.build("hex").unwrap(), AnyCodec::Base16(Base16));
        assert_eq!(config.build("base58").unwrap(), AnyCodec::Base58(Base58));
        assert_eq!(
            config.build("base64").unwrap(),
            AnyCodec::Base64(Base64::standard())
        );
        assert_eq!(
            config.build("base64url").unwrap(),
            AnyCodec::Base64(Base64::url_safe())
        );
        assert_eq!(config.build("mime").unwrap(), AnyCodec::Base64(Base64::mime()));
        assert_eq!(
            config.build("rfc2045").unwrap(),
            AnyCodec::Base64(Base64::with_flags(Base64Flags::DEFAULT))
        );
        assert_eq!(
            config.build("base64url_nopad").unwrap(),
            AnyCodec::Base64(Base64::with_flags(
                Base64Flags::URL_SAFE | Base64Flags::NO_PADDING | Base64Flags::NO_WRAP
            ))
        );
    }

    #[test]
    fn test_load_from_toml_string() {
        let config = registry(
            r#"
[codecs.pem]
scheme = "base64"
wrap = 64
description = "PEM body"

[settings]
default_codec = "pem"
"#,
        );
        let codec = config.build("pem").unwrap();
        let AnyCodec::Base64(base64) = codec else {
            panic!("expected base64, got {codec:?}");
        };
        assert_eq!(base64.line_length(), Some(64));
        assert_eq!(base64.line_terminator(), Some(LineTerminator::Lf));
        assert_eq!(config.settings.default_codec.as_deref(), Some("pem"));
    }

    #[test]
    fn test_wrap_rounds_down() {
        let config = registry(
            r#"
[codecs.odd]
scheme = "base64"
wrap = 77
line_terminator = "crlf"
"#,
        );
        let AnyCodec::Base64(base64) = config.build("odd").unwrap() else {
            panic!("expected base64");
        };
        assert_eq!(base64.line_length(), Some(MIME_LINE_MAX));
        assert_eq!(base64, Base64::mime());
    }

    #[test]
    fn test_base64_options_rejected_on_other_schemes() {
        let mut config = CodecConfig::new(Scheme::Base58);
        config.padding = Some(false);
        let err = config.build().unwrap_err();
        assert!(err.to_string().contains("'padding' only applies to base64"));

        let mut config = CodecConfig::new(Scheme::Base16);
        config.wrap = Some(76);
        assert!(config.build().is_err());
    }

    #[test]
    fn test_invalid_wrap() {
        let mut config = CodecConfig::new(Scheme::Base64);
        config.wrap = Some(3);
        assert!(config.build().is_err());

        let mut config = CodecConfig::new(Scheme::Base64);
        config.line_terminator = Some(TerminatorStyle::Crlf);
        assert!(config.build().is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = CodecRegistry::from_toml(
            r#"
[codecs.typo]
scheme = "base64"
paddding = false
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_configs() {
        let mut base = registry(
            r#"
[codecs.a]
scheme = "base16"

[codecs.b]
scheme = "base58"
"#,
        );
        let overrides = registry(
            r#"
[codecs.b]
scheme = "base64"

[codecs.c]
scheme = "base58"

[settings]
default_codec = "c"
"#,
        );

        base.merge(overrides);

        assert_eq!(base.codecs.len(), 3);
        assert_eq!(base.get_codec("a").unwrap().scheme, Scheme::Base16);
        assert_eq!(base.get_codec("b").unwrap().scheme, Scheme::Base64);
        assert_eq!(base.settings.default_codec.as_deref(), Some("c"));
        assert_eq!(base.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_keeps_default_codec_when_unset() {
        let mut base = registry(
            r#"
[codecs.a]
scheme = "base16"

[settings]
default_codec = "a"
"#,
        );
        base.merge(registry("[codecs]\n"));
        assert_eq!(base.settings.default_codec.as_deref(), Some("a"));
    }

    #[test]
    fn test_unknown_codec_suggests_closest() {
        let config = CodecRegistry::load_default().unwrap();
        let err = config.build("bas64").unwrap_err();
        match err {
            ResolveError::NotFound(not_found) => {
                assert_eq!(not_found.name, "bas64");
                assert_eq!(not_found.suggestion.as_deref(), Some("base64"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
