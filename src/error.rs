//! Error types for the Raiden client.

use crate::address::AddressError;
use crate::transport::{Method, TransportError};
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, RaidenError>;

/// Errors from Raiden API calls
#[derive(Debug, Error)]
pub enum RaidenError {
    /// The request never produced a response
    #[error("{method} {url}: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: TransportError,
    },

    /// The response body did not match the expected JSON shape
    #[error(transparent)]
    Decode(serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(serde_json::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl RaidenError {
    /// True when the response body ended before a complete JSON value
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, RaidenError::Decode(e) if e.is_eof())
    }

    /// The transport failure, if this error is one
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            RaidenError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}
