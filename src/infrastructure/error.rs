// Errors raised while talking to the vault backend
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// DNS, connect, or timeout failure before a response arrived
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. The body is only logged.
    #[error("Request failed with status code {status}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode { .. } => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Network(e) if e.is_timeout())
    }
}
