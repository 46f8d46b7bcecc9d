//! CLI for minires.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use minires_core::config;
use minires_core::{InterpreterMajor, ListingResolver};

use commands::{parse_base_url, run_list, run_resolve, Settings};

/// Print the URL of the latest Miniconda installer for Linux x86_64.
#[derive(Debug, Parser)]
#[command(name = "minires", version)]
#[command(about = "Resolve the latest Miniconda installer URL", long_about = None)]
pub struct Cli {
    /// Interpreter major version (2 or 3). Defaults to the config value, else 3.
    #[arg(long, value_name = "N")]
    pub major: Option<InterpreterMajor>,

    /// Directory-listing URL; the installer filename is appended verbatim.
    #[arg(long, value_name = "URL", value_parser = parse_base_url)]
    pub base_url: Option<String>,

    /// Print every distinct matching installer URL instead of only the latest.
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let settings = Settings::merge(&cli, &cfg);
        let resolver =
            ListingResolver::over_http(&settings.base_url, settings.major, settings.fetch)?;
        let mut out = std::io::stdout().lock();
        if cli.list {
            run_list(&resolver, &mut out)
        } else {
            run_resolve(&resolver, &mut out)
        }
    }
}

#[cfg(test)]
mod tests;
