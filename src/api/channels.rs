//! Payment channels: listing, opening, depositing and closing.

use crate::address::Address;
use crate::client::RaidenClient;
use crate::context::Context;
use crate::error::Result;
use crate::request::Endpoint;
use crate::transport::Method;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Channel lifecycle state as reported by the node.
///
/// States this client does not know are kept verbatim in [`ChannelState::Other`]
/// so a newer node never breaks a listing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChannelState {
    Opened,
    WaitingForClose,
    Closed,
    WaitingForSettle,
    Settled,
    Unusable,
    Other(String),
}

impl ChannelState {
    /// The state string used on the wire
    pub fn as_str(&self) -> &str {
        match self {
            ChannelState::Opened => "opened",
            ChannelState::WaitingForClose => "waiting_for_close",
            ChannelState::Closed => "closed",
            ChannelState::WaitingForSettle => "waiting_for_settle",
            ChannelState::Settled => "settled",
            ChannelState::Unusable => "channel_unusable",
            ChannelState::Other(raw) => raw,
        }
    }
}

impl From<&str> for ChannelState {
    fn from(s: &str) -> Self {
        match s {
            "opened" | "open" => ChannelState::Opened,
            "waiting_for_close" => ChannelState::WaitingForClose,
            "closed" => ChannelState::Closed,
            "waiting_for_settle" => ChannelState::WaitingForSettle,
            "settled" => ChannelState::Settled,
            "channel_unusable" => ChannelState::Unusable,
            other => ChannelState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChannelState {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChannelState {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        Ok(ChannelState::from(raw.as_str()))
    }
}

/// A payment channel between us and a partner on one token network
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub token_network_identifier: Address,
    pub channel_identifier: u64,
    pub partner_address: Address,
    pub token_address: Address,
    pub balance: u64,
    pub total_deposit: u64,
    pub state: ChannelState,
    pub settle_timeout: u64,
    pub reveal_timeout: u64,
}

#[derive(Serialize)]
struct OpenChannelRequest {
    partner_address: Address,
    token_address: Address,
    total_deposit: u64,
    settle_timeout: u64,
}

/// Body of a channel PATCH
#[derive(Serialize)]
#[serde(untagged)]
enum ChannelPatch {
    State { state: ChannelState },
    Deposit { total_deposit: u64 },
}

/// `/channels` operations
pub struct Channels<'a> {
    client: &'a RaidenClient,
}

impl<'a> Channels<'a> {
    pub(crate) fn new(client: &'a RaidenClient) -> Self {
        Self { client }
    }

    /// Every channel the node is part of
    pub async fn list_all(&self, ctx: &Context) -> Result<Vec<Channel>> {
        self.client.call(ctx, Method::Get, Endpoint::new("channels")).await
    }

    /// Channels on `token`
    pub async fn list_token(&self, ctx: &Context, token: Address) -> Result<Vec<Channel>> {
        let endpoint = Endpoint::new("channels").segment(token);
        self.client.call(ctx, Method::Get, endpoint).await
    }

    /// The channel with `partner` on `token`
    pub async fn get(&self, ctx: &Context, token: Address, partner: Address) -> Result<Channel> {
        self.client
            .call(ctx, Method::Get, channel_endpoint(token, partner))
            .await
    }

    /// Open a channel with `partner` on `token`, depositing `total_deposit`
    pub async fn open(
        &self,
        ctx: &Context,
        token: Address,
        partner: Address,
        total_deposit: u64,
        settle_timeout: u64,
    ) -> Result<Channel> {
        let body = OpenChannelRequest {
            partner_address: partner,
            token_address: token,
            total_deposit,
            settle_timeout,
        };
        self.client
            .call_with_body(ctx, Method::Put, Endpoint::new("channels"), &body)
            .await
    }

    /// Raise our total deposit in the channel to `total_deposit`
    pub async fn deposit(
        &self,
        ctx: &Context,
        token: Address,
        partner: Address,
        total_deposit: u64,
    ) -> Result<Channel> {
        self.patch(ctx, token, partner, ChannelPatch::Deposit { total_deposit })
            .await
    }

    /// Close the channel with `partner` on `token`
    pub async fn close(&self, ctx: &Context, token: Address, partner: Address) -> Result<Channel> {
        let state = ChannelState::Closed;
        self.patch(ctx, token, partner, ChannelPatch::State { state })
            .await
    }

    async fn patch(
        &self,
        ctx: &Context,
        token: Address,
        partner: Address,
        patch: ChannelPatch,
    ) -> Result<Channel> {
        self.client
            .call_with_body(ctx, Method::Patch, channel_endpoint(token, partner), &patch)
            .await
    }
}

fn channel_endpoint(token: Address, partner: Address) -> Endpoint {
    Endpoint::new("channels").segment(token).segment(partner)
}
