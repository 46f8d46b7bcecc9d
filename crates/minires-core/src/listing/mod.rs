//! Listing scan: the version-aware filename pattern and the matches it yields.
//!
//! Matching is unanchored and runs over the raw page text, so a filename that
//! appears both in an `href` and in the link text is matched twice. Order of
//! appearance is kept.

mod matches;
mod pattern;

pub use matches::MatchList;
pub use pattern::{InterpreterMajor, ParseMajorError, VersionPattern, PLATFORM};
