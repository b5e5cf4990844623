//! Fetch error types.

use thiserror::Error;

/// Terminal outcome of a failed fetch.
///
/// Exactly one of these kinds surfaces per call, carrying the raw
/// underlying error untranslated. There is no retry and no local recovery;
/// the caller decides whether to retry, log, or give up.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The connection could not be established or failed mid-transfer
    /// (DNS, TCP, TLS, or a broken body stream).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was received in full but is not valid JSON. This includes
    /// empty bodies, truncated bodies, and non-JSON error pages.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
