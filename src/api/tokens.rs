//! Token networks and their partners.

use crate::address::Address;
use crate::client::RaidenClient;
use crate::context::Context;
use crate::error::Result;
use crate::request::Endpoint;
use crate::transport::Method;
use serde::{Deserialize, Serialize};

/// Counterparty in one of our channels on a token network
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(rename = "partner_address")]
    pub address: Address,
    /// API path of the channel, e.g. `/api/v1/channels/{token}/{partner}`
    #[serde(rename = "channel")]
    pub channel_uri: String,
}

/// Result of registering a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenNetwork {
    pub token_network_address: Address,
}

/// `/tokens` operations
pub struct Tokens<'a> {
    client: &'a RaidenClient,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(client: &'a RaidenClient) -> Self {
        Self { client }
    }

    /// Token network address for `token`
    pub async fn get(&self, ctx: &Context, token: Address) -> Result<Address> {
        let endpoint = Endpoint::new("tokens").segment(token);
        self.client.call(ctx, Method::Get, endpoint).await
    }

    /// Every token registered with the node
    pub async fn list(&self, ctx: &Context) -> Result<Vec<Address>> {
        self.client.call(ctx, Method::Get, Endpoint::new("tokens")).await
    }

    /// Partners we have channels with on `token`
    pub async fn list_partners(&self, ctx: &Context, token: Address) -> Result<Vec<Partner>> {
        let endpoint = Endpoint::new("tokens").segment(token).segment("partners");
        self.client.call(ctx, Method::Get, endpoint).await
    }

    /// Register `token`, creating its token network
    pub async fn register(&self, ctx: &Context, token: Address) -> Result<TokenNetwork> {
        let endpoint = Endpoint::new("tokens").segment(token);
        self.client.call(ctx, Method::Put, endpoint).await
    }
}
