//! Token network connections.

use crate::address::Address;
use crate::client::RaidenClient;
use crate::context::Context;
use crate::error::Result;
use crate::request::Endpoint;
use crate::transport::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Our connection to one token network
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub funds: u64,
    pub sum_deposits: u64,
    pub channels: u64,
}

/// `/connections` operations
pub struct Connections<'a> {
    client: &'a RaidenClient,
}

impl<'a> Connections<'a> {
    pub(crate) fn new(client: &'a RaidenClient) -> Self {
        Self { client }
    }

    /// Connections keyed by token address
    pub async fn list(&self, ctx: &Context) -> Result<BTreeMap<Address, Connection>> {
        self.client
            .call(ctx, Method::Get, Endpoint::new("connections"))
            .await
    }

    /// Leave the token network for `token`, closing every channel in it.
    ///
    /// Returns the partners whose channels were closed, in the node's order.
    pub async fn leave(&self, ctx: &Context, token: Address) -> Result<Vec<Address>> {
        let endpoint = Endpoint::new("connections").segment(token);
        self.client.call(ctx, Method::Delete, endpoint).await
    }
}
