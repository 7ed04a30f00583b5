//! REST client for a Raiden node.
//!
//! Every operation goes through [`RaidenClient::call`]: build the URL, send the
//! request over the injected transport, then decode the body as JSON.

use crate::api::{Channels, Connections, Node, Payments, PendingTransfers, Tokens};
use crate::config::Config;
use crate::context::Context;
use crate::error::{RaidenError, Result};
use crate::request::Endpoint;
use crate::transport::{HttpRequest, HttpTransport, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for a node's REST management API
#[derive(Clone)]
pub struct RaidenClient {
    config: Config,
    transport: Arc<dyn HttpTransport>,
}

impl RaidenClient {
    /// Create a client backed by a reqwest `Client` built from `config`
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(RaidenError::ClientBuild)?;

        Ok(Self::with_transport(config, Arc::new(client)))
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    pub fn pending_transfers(&self) -> PendingTransfers<'_> {
        PendingTransfers::new(self)
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    pub fn channels(&self) -> Channels<'_> {
        Channels::new(self)
    }

    pub fn connections(&self) -> Connections<'_> {
        Connections::new(self)
    }

    pub fn node(&self) -> Node<'_> {
        Node::new(self)
    }

    /// Send a bodiless request and decode the response
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        method: Method,
        endpoint: Endpoint,
    ) -> Result<T> {
        self.execute(ctx, method, endpoint, None).await
    }

    /// Send `body` as JSON and decode the response
    pub(crate) async fn call_with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        ctx: &Context,
        method: Method,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_vec(body).map_err(RaidenError::Encode)?;
        self.execute(ctx, method, endpoint, Some(body)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        method: Method,
        endpoint: Endpoint,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let url = endpoint.url(&self.config);
        debug!(%method, %url, "sending request");

        let request = HttpRequest {
            method,
            url: url.clone(),
            body,
        };

        let response = ctx
            .run(self.transport.execute(request))
            .await
            .map_err(|source| RaidenError::Transport {
                method,
                url: url.clone(),
                source,
            })?;

        if response.is_success() {
            debug!(%method, %url, status = response.status, "received response");
        } else {
            // The body still goes to the decoder; an empty one fails there.
            warn!(%method, %url, status = response.status, "node returned non-success status");
        }

        serde_json::from_slice(&response.body).map_err(RaidenError::Decode)
    }
}
