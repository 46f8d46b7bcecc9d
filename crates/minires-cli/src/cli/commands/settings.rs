//! Effective settings: CLI flag, then config file, then built-in default.

use minires_core::config::{self, MiniresConfig};
use minires_core::fetch::FetchOptions;
use minires_core::InterpreterMajor;

use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub major: InterpreterMajor,
    pub fetch: FetchOptions,
}

impl Settings {
    pub fn merge(cli: &Cli, cfg: &MiniresConfig) -> Self {
        Self {
            base_url: cli.base_url.clone().unwrap_or_else(|| cfg.base_url.clone()),
            major: cli.major.unwrap_or(cfg.major),
            fetch: cfg.fetch_options(),
        }
    }
}

/// clap value parser for `--base-url`; same rules as `base_url` in config.toml.
pub fn parse_base_url(s: &str) -> Result<String, String> {
    config::validate_base_url(s).map_err(|e| format!("{:#}", e))
}
