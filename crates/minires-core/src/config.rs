use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;
use crate::listing::InterpreterMajor;
use crate::resolver::DEFAULT_BASE_URL;

/// Optional configuration loaded from `~/.config/minires/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniresConfig {
    /// Directory-listing URL; filenames are appended to it verbatim.
    pub base_url: String,
    /// Interpreter major version selecting `Miniconda2-…` or `Miniconda3-…`.
    pub major: InterpreterMajor,
    /// Connect timeout in seconds (None = libcurl default).
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for MiniresConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            major: InterpreterMajor::default(),
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl MiniresConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Accepts only absolute URLs that can take a path appended. The input string is
/// returned untouched, since filenames are concatenated onto it verbatim.
pub fn validate_base_url(s: &str) -> Result<String> {
    let parsed = url::Url::parse(s).with_context(|| format!("invalid base URL `{}`", s))?;
    if parsed.cannot_be_a_base() {
        anyhow::bail!("`{}` cannot be used as a base URL", s);
    }
    Ok(s.to_string())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("minires")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG config dir. A missing file means defaults;
/// nothing is written to disk.
pub fn load_or_default() -> Result<MiniresConfig> {
    let path = config_path()?;
    load_from(&path)
}

/// Load configuration from `path`, falling back to defaults if it does not exist.
pub fn load_from(path: &Path) -> Result<MiniresConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(MiniresConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: MiniresConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    validate_base_url(&cfg.base_url)
        .with_context(|| format!("base_url in {}", path.display()))?;
    Ok(cfg)
}
