//! Transfers that are still in flight.

use crate::address::Address;
use crate::client::RaidenClient;
use crate::context::Context;
use crate::error::Result;
use crate::request::Endpoint;
use crate::transport::Method;
use serde::{Deserialize, Serialize};

/// Our part in a pending transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Initiator,
    Mediator,
    Target,
}

/// A transfer that has been initiated but not finalized
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub channel_identifier: u64,
    pub initiator: Address,
    pub locked_amount: u64,
    pub payment_identifier: u64,
    pub role: Role,
    pub target: Address,
    pub token_address: Address,
    pub token_network_identifier: Address,
    pub transferred_amount: u64,
}

/// `/pending_transfers` operations
pub struct PendingTransfers<'a> {
    client: &'a RaidenClient,
}

impl<'a> PendingTransfers<'a> {
    pub(crate) fn new(client: &'a RaidenClient) -> Self {
        Self { client }
    }

    /// Every pending transfer known to the node
    pub async fn list_all(&self, ctx: &Context) -> Result<Vec<Transfer>> {
        self.list(ctx, None, None).await
    }

    /// Pending transfers on `token`
    pub async fn list_token(&self, ctx: &Context, token: Address) -> Result<Vec<Transfer>> {
        self.list(ctx, Some(token), None).await
    }

    /// Pending transfers in the channel with `partner` on `token`
    pub async fn list_channel(
        &self,
        ctx: &Context,
        token: Address,
        partner: Address,
    ) -> Result<Vec<Transfer>> {
        self.list(ctx, Some(token), Some(partner)).await
    }

    async fn list(
        &self,
        ctx: &Context,
        token: Option<Address>,
        partner: Option<Address>,
    ) -> Result<Vec<Transfer>> {
        let endpoint = Endpoint::new("pending_transfers")
            .optional_segment(token)
            .optional_segment(partner);
        self.client.call(ctx, Method::Get, endpoint).await
    }
}
