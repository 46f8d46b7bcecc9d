//! Ordered filenames extracted from a listing page.

use std::collections::HashSet;

/// Matched filenames in document order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchList(Vec<String>);

impl MatchList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Last filename in document order; not necessarily the highest version.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Filenames with repeats dropped, in order of first appearance.
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.iter().filter(|f| seen.insert(*f)).collect()
    }
}

impl FromIterator<String> for MatchList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
