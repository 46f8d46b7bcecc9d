//! `minires --list` – print every matching installer URL.

use anyhow::Result;
use minires_core::fetch::ListingSource;
use minires_core::ListingResolver;
use std::io::Write;

/// One `base_url + filename` line per distinct match, first appearance first.
pub fn run_list<S: ListingSource, W: Write>(
    resolver: &ListingResolver<S>,
    out: &mut W,
) -> Result<()> {
    let resolved = resolver.resolve()?;
    for filename in resolved.candidates.distinct() {
        writeln!(out, "{}{}", resolver.base_url(), filename)?;
    }
    Ok(())
}
