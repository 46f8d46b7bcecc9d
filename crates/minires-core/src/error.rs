//! Error type for fetching a listing and resolving an installer from it.

use thiserror::Error;

/// Everything that can go wrong between issuing the GET and producing a URL.
///
/// No variant is retried; callers surface it and exit.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Curl reported an error (connect, DNS, TLS, timeout, etc.).
    #[error("fetching listing failed: {0}")]
    Transport(#[from] curl::Error),

    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// The listing body is not valid UTF-8.
    #[error("listing is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The filename pattern did not compile.
    #[error("invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The listing contained no filename matching the pattern.
    #[error("no installer matching `{pattern}` found at {url}")]
    NoMatch { url: String, pattern: String },
}
