//! Node identity.

use crate::address::Address;
use crate::client::RaidenClient;
use crate::context::Context;
use crate::error::Result;
use crate::request::Endpoint;
use crate::transport::Method;
use serde::Deserialize;

#[derive(Deserialize)]
struct AddressResponse {
    our_address: Address,
}

/// `/address` operations
pub struct Node<'a> {
    client: &'a RaidenClient,
}

impl<'a> Node<'a> {
    pub(crate) fn new(client: &'a RaidenClient) -> Self {
        Self { client }
    }

    /// The node's own account address
    pub async fn address(&self, ctx: &Context) -> Result<Address> {
        let response: AddressResponse = self
            .client
            .call(ctx, Method::Get, Endpoint::new("address"))
            .await?;
        Ok(response.our_address)
    }
}
