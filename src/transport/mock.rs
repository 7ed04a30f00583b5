//! Mock HTTP transport for testing.

use super::traits::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Canned response for a method and URL
#[derive(Clone, Debug)]
struct Responder {
    status: u16,
    body: String,
}

/// In-memory transport answering from registered responders.
///
/// Requests without a matching responder fail with
/// [`TransportError::NoResponder`], which stands in for an unreachable node.
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Map of (method, url) -> canned response
    responders: Arc<Mutex<HashMap<(Method, String), Responder>>>,
    /// Every request seen, in order
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    /// Simulated latency before answering
    latency: Option<Duration>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Create a mock with no responders
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Answer `method url` with `status` and `body`, replacing any earlier responder
    pub fn register(
        &self,
        method: Method,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) {
        lock(&self.responders).insert(
            (method, url.into()),
            Responder {
                status,
                body: body.into(),
            },
        );
    }

    /// Drop all responders so every request fails at the transport
    pub fn reset(&self) {
        lock(&self.responders).clear();
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(request.clone());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let responder = lock(&self.responders)
            .get(&(request.method, request.url.clone()))
            .cloned()
            .ok_or(TransportError::NoResponder {
                method: request.method,
                url: request.url,
            })?;

        Ok(HttpResponse {
            status: responder.status,
            body: responder.body.into_bytes(),
        })
    }
}
