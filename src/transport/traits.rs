//! HTTP transport trait definition.

use async_trait::async_trait;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors from executing a request
#[derive(Debug, Error)]
pub enum TransportError {
    /// The node could not be reached; `cause` is the innermost error text
    #[error("connection failed: {cause}")]
    Connect {
        cause: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Http(reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("no responder found for {method} {url}")]
    NoResponder { method: Method, url: String },
}

impl TransportError {
    /// True if the request failed while connecting to the node
    pub fn is_connect(&self) -> bool {
        matches!(self, TransportError::Connect { .. })
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            TransportError::Connect {
                cause: root_cause(&e),
                source: e,
            }
        } else {
            TransportError::Http(e)
        }
    }
}

/// Text of the last error in the `source` chain
fn root_cause(err: &(dyn StdError + 'static)) -> String {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}

/// HTTP request methods used by the node API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Returns the method as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully built request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, if any
    pub body: Option<Vec<u8>>,
}

/// Status and raw body of a response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for executing HTTP requests against a node.
///
/// Implementations must be safe to share between concurrent calls:
/// - `reqwest::Client` for real nodes
/// - `MockTransport` for tests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and read the full response body
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
