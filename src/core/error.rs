use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum OandaError {
    /// An error occurred during an HTTP request (transport, timeout or body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request body or query could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned a non-2xx status without a recognizable error body.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server rejected the request and explained why.
    #[error("OANDA API error {status} at {url}: {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The upstream `errorCode`, when one was sent.
        code: Option<String>,
        /// The upstream `errorMessage`.
        message: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    /// Decode failures are reported here, prefixed with the operation name.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The request was rejected locally before anything was sent.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl OandaError {
    /// The HTTP status attached to this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
