//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The provider does not know the symbol, or has no data for it.
    #[error("symbol not found: {symbol} ({description})")]
    SymbolNotFound { symbol: String, description: String },
    /// The provider rejected the request with HTTP 429.
    #[error("Rate limited by data provider (HTTP 429)")]
    RateLimited,
    /// The provider rejected the session cookie or crumb (HTTP 401).
    #[error("Unauthorized by data provider (HTTP 401): {0}")]
    Unauthorized(String),
    /// No usable session crumb could be obtained.
    #[error("Failed to obtain provider session: {0}")]
    Session(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The response envelope carried an error object.
    #[error("Provider error {code}: {description}")]
    Provider { code: String, description: String },
    /// An HTTP request failed (network error, timeout, TLS).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The base URL or request path could not be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
