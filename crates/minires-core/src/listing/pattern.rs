//! Version-aware installer filename pattern.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::MatchList;
use crate::error::ResolveError;

/// The only platform tag we look for. Spliced into the pattern as-is, so it must
/// stay free of regex metacharacters (a bare `-` is literal outside a class).
pub const PLATFORM: &str = "Linux-x86_64";

/// Interpreter major version baked into installer names (`Miniconda2-…`, `Miniconda3-…`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InterpreterMajor {
    Two,
    #[default]
    Three,
}

impl InterpreterMajor {
    pub fn digit(self) -> u8 {
        match self {
            InterpreterMajor::Two => 2,
            InterpreterMajor::Three => 3,
        }
    }
}

impl fmt::Display for InterpreterMajor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// Rejected interpreter major (anything but 2 or 3).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported interpreter major version `{0}` (expected 2 or 3)")]
pub struct ParseMajorError(pub String);

impl TryFrom<u8> for InterpreterMajor {
    type Error = ParseMajorError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            2 => Ok(InterpreterMajor::Two),
            3 => Ok(InterpreterMajor::Three),
            other => Err(ParseMajorError(other.to_string())),
        }
    }
}

impl From<InterpreterMajor> for u8 {
    fn from(m: InterpreterMajor) -> u8 {
        m.digit()
    }
}

impl FromStr for InterpreterMajor {
    type Err = ParseMajorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" => Ok(InterpreterMajor::Two),
            "3" => Ok(InterpreterMajor::Three),
            other => Err(ParseMajorError(other.to_string())),
        }
    }
}

/// Compiled `Miniconda<major>-X.Y.Z-Linux-x86_64.sh` matcher.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    major: InterpreterMajor,
    re: Regex,
}

impl VersionPattern {
    pub fn new(major: InterpreterMajor) -> Result<Self, ResolveError> {
        let source = format!(
            r"Miniconda{}-\d+\.\d+\.\d+-{}\.sh",
            major.digit(),
            PLATFORM
        );
        let re = Regex::new(&source)?;
        Ok(Self { major, re })
    }

    pub fn major(&self) -> InterpreterMajor {
        self.major
    }

    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }

    /// All non-overlapping matches in `text`, in document order.
    pub fn find_all(&self, text: &str) -> MatchList {
        self.re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
