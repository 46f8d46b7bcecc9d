//! HTTP GET of the directory listing.
//!
//! Uses the curl crate (libcurl) in blocking mode. The whole body is collected
//! in memory; listing pages are small.

use std::time::Duration;

use crate::error::ResolveError;

/// Transport knobs. `None` leaves libcurl's own default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

/// Something that can hand back the raw bytes of a listing page.
pub trait ListingSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ResolveError>;
}

/// Fetches listings over HTTP(S) with a fresh curl handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlSource {
    pub options: FetchOptions,
}

impl CurlSource {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

impl ListingSource for CurlSource {
    /// Performs a GET and returns the response body.
    ///
    /// Follows redirects. Runs in the current thread. The curl handle is
    /// dropped (and its connection closed) before returning.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ResolveError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        if let Some(t) = self.options.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.options.timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(ResolveError::Http {
                url: url.to_string(),
                status: code,
            });
        }

        tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, code, body.len());
        Ok(body)
    }
}
