use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{DecodeOptions, EncodeOptions, DECODE_DEFAULT_CHARS, DEFAULT_CHARS};

/// `[encode]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Characters left unescaped besides alphanumerics (None = URL default set).
    #[serde(default)]
    pub exclude: Option<String>,
    /// Keep existing `%XX` escapes instead of escaping their `%`.
    pub keep_escaped: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            exclude: None,
            keep_escaped: true,
        }
    }
}

/// `[decode]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Characters whose escapes stay escaped (None = URL default set).
    #[serde(default)]
    pub exclude: Option<String>,
}

/// `[parse]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Treat a scheme-less `//host/path` as having an authority.
    pub slashes_denote_host: bool,
}

/// `[bench]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Measured iterations per benchmark case.
    pub iterations: u32,
    /// Untimed iterations run before measuring.
    pub warmup: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            warmup: 10_000,
        }
    }
}

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlKitConfig {
    #[serde(default)]
    pub encode: EncodeConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default)]
    pub bench: BenchConfig,
}

impl UrlKitConfig {
    pub fn encode_options(&self) -> EncodeOptions<'_> {
        EncodeOptions {
            exclude: self.encode.exclude.as_deref().unwrap_or(DEFAULT_CHARS),
            keep_escaped: self.encode.keep_escaped,
        }
    }

    pub fn decode_options(&self) -> DecodeOptions<'_> {
        DecodeOptions {
            exclude: self.decode.exclude.as_deref().unwrap_or(DECODE_DEFAULT_CHARS),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlKitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlKitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlKitConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UrlKitConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
