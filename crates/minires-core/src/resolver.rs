//! Resolver: turn a directory listing into the URL of the latest installer.
//!
//! The sequence is linear: fetch, decode, match, select, concatenate. The
//! "latest" installer is the last match in document order, which is what the
//! upstream listing yields when sorted ascending. No version comparison is done.

use crate::error::ResolveError;
use crate::fetch::{CurlSource, FetchOptions, ListingSource};
use crate::listing::{InterpreterMajor, MatchList, VersionPattern};

/// Default package-repository index page.
pub const DEFAULT_BASE_URL: &str = "http://repo.continuum.io/miniconda/";

/// Outcome of a successful resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstaller {
    /// `base_url` followed by `filename`, nothing else.
    pub url: String,
    pub filename: String,
    /// Every match found, in document order.
    pub candidates: MatchList,
}

/// Resolves installers from a listing served at `base_url`.
#[derive(Debug, Clone)]
pub struct ListingResolver<S> {
    base_url: String,
    pattern: VersionPattern,
    source: S,
}

impl ListingResolver<CurlSource> {
    /// Resolver over HTTP with the given transport options.
    pub fn over_http(
        base_url: impl Into<String>,
        major: InterpreterMajor,
        options: FetchOptions,
    ) -> Result<Self, ResolveError> {
        Self::with_source(base_url, major, CurlSource::new(options))
    }
}

impl<S: ListingSource> ListingResolver<S> {
    pub fn with_source(
        base_url: impl Into<String>,
        major: InterpreterMajor,
        source: S,
    ) -> Result<Self, ResolveError> {
        Ok(Self {
            base_url: base_url.into(),
            pattern: VersionPattern::new(major)?,
            source,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pattern(&self) -> &VersionPattern {
        &self.pattern
    }

    pub fn resolve(&self) -> Result<ResolvedInstaller, ResolveError> {
        tracing::info!(
            "resolving Miniconda{} installer from {}",
            self.pattern.major(),
            self.base_url
        );
        let body = self.source.fetch(&self.base_url)?;
        let resolved = select_latest(&self.base_url, body, &self.pattern)?;
        tracing::info!(
            "selected {} ({} candidates)",
            resolved.filename,
            resolved.candidates.len()
        );
        Ok(resolved)
    }
}

/// Decode `body`, scan it with `pattern`, and build the URL of the last match.
pub fn select_latest(
    base_url: &str,
    body: Vec<u8>,
    pattern: &VersionPattern,
) -> Result<ResolvedInstaller, ResolveError> {
    let text = String::from_utf8(body)?;
    let candidates = pattern.find_all(&text);
    tracing::debug!("pattern {} matched {} times", pattern.as_str(), candidates.len());

    let filename = match candidates.last() {
        Some(f) => f.to_string(),
        None => {
            return Err(ResolveError::NoMatch {
                url: base_url.to_string(),
                pattern: pattern.as_str().to_string(),
            })
        }
    };

    Ok(ResolvedInstaller {
        url: format!("{}{}", base_url, filename),
        filename,
        candidates,
    })
}

/// Fetch `base_url` and return the URL of the last matching installer.
///
/// Uses libcurl's default timeouts.
pub fn resolve(base_url: &str, major: InterpreterMajor) -> Result<String, ResolveError> {
    let resolver = ListingResolver::over_http(base_url, major, FetchOptions::default())?;
    Ok(resolver.resolve()?.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const BASE: &str = "https://repo.example.com/miniconda/";

    /// Serves a fixed body and records requested URLs.
    struct StaticSource {
        body: Vec<u8>,
        requested: RefCell<Vec<String>>,
    }

    impl StaticSource {
        fn new(body: impl Into<Vec<u8>>) -> Self {
            Self {
                body: body.into(),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl ListingSource for StaticSource {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, ResolveError> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    struct FailingSource;

    impl ListingSource for FailingSource {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, ResolveError> {
            Err(ResolveError::Http {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    fn pattern3() -> VersionPattern {
        VersionPattern::new(InterpreterMajor::Three).unwrap()
    }

    #[test]
    fn last_in_document_order_wins() {
        let body = "Miniconda3-4.5.1-Linux-x86_64.sh\nMiniconda3-4.5.4-Linux-x86_64.sh\n";
        let r = select_latest(BASE, body.into(), &pattern3()).unwrap();
        assert_eq!(
            r.url,
            "https://repo.example.com/miniconda/Miniconda3-4.5.4-Linux-x86_64.sh"
        );
        assert_eq!(r.filename, "Miniconda3-4.5.4-Linux-x86_64.sh");
    }

    #[test]
    fn no_version_sort_is_applied() {
        let body = "Miniconda3-4.5.4-Linux-x86_64.sh Miniconda3-4.5.1-Linux-x86_64.sh";
        let r = select_latest(BASE, body.into(), &pattern3()).unwrap();
        assert_eq!(r.filename, "Miniconda3-4.5.1-Linux-x86_64.sh");
    }

    #[test]
    fn empty_listing_is_no_match() {
        let body = "<html><body>Miniconda3-4.5.1-MacOSX-x86_64.sh</body></html>";
        let err = select_latest(BASE, body.into(), &pattern3()).unwrap_err();
        match err {
            ResolveError::NoMatch { url, pattern } => {
                assert_eq!(url, BASE);
                assert_eq!(pattern, pattern3().as_str());
            }
            other => panic!("expected NoMatch, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_decode_error() {
        let mut body = b"Miniconda3-4.5.1-Linux-x86_64.sh ".to_vec();
        body.push(0xff);
        let err = select_latest(BASE, body, &pattern3()).unwrap_err();
        assert!(matches!(err, ResolveError::Decode(_)));
    }

    #[test]
    fn url_is_plain_concatenation() {
        // No slash is inserted; the base is used verbatim.
        let r = select_latest(
            "http://h/dir",
            "Miniconda3-1.2.3-Linux-x86_64.sh".into(),
            &pattern3(),
        )
        .unwrap();
        assert_eq!(r.url, "http://h/dirMiniconda3-1.2.3-Linux-x86_64.sh");
    }

    #[test]
    fn resolver_fetches_base_url_once() {
        let src = StaticSource::new(
            "<a href=\"Miniconda2-4.5.4-Linux-x86_64.sh\">Miniconda2-4.5.4-Linux-x86_64.sh</a>",
        );
        let resolver = ListingResolver::with_source(BASE, InterpreterMajor::Two, src).unwrap();
        let r = resolver.resolve().unwrap();
        assert_eq!(r.filename, "Miniconda2-4.5.4-Linux-x86_64.sh");
        assert_eq!(r.candidates.len(), 2);
        assert_eq!(resolver.source.requested.borrow().as_slice(), [BASE]);
    }

    #[test]
    fn resolver_propagates_fetch_error() {
        let resolver =
            ListingResolver::with_source(BASE, InterpreterMajor::Three, FailingSource).unwrap();
        let err = resolver.resolve().unwrap_err();
        assert!(matches!(err, ResolveError::Http { status: 503, .. }));
    }
}
