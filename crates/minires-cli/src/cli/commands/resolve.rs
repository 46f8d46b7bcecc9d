//! `minires` – print the latest installer URL.

use anyhow::Result;
use minires_core::fetch::ListingSource;
use minires_core::ListingResolver;
use std::io::Write;

/// Writes exactly one line on success and nothing on failure.
pub fn run_resolve<S: ListingSource, W: Write>(
    resolver: &ListingResolver<S>,
    out: &mut W,
) -> Result<()> {
    let resolved = resolver.resolve()?;
    writeln!(out, "{}", resolved.url)?;
    Ok(())
}
