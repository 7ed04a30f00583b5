//! Payment history and payment initiation.

use crate::address::Address;
use crate::client::RaidenClient;
use crate::context::Context;
use crate::error::Result;
use crate::request::Endpoint;
use crate::transport::Method;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of payment history entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "EventPaymentReceivedSuccess")]
    ReceivedSuccess,
    #[serde(rename = "EventPaymentSentSuccess")]
    SentSuccess,
    #[serde(rename = "EventPaymentSentFailed")]
    SentFailed,
}

impl EventKind {
    pub fn is_received(&self) -> bool {
        matches!(self, EventKind::ReceivedSuccess)
    }
}

/// Payment history entry.
///
/// Received events name the `initiator`, sent events the `target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "event")]
    pub kind: EventKind,
    #[serde(default)]
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Address>,
    pub identifier: u64,
    /// Failure reason on `SentFailed` events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub log_time: DateTime<Utc>,
}

impl Event {
    /// The other side of the payment
    pub fn counterparty(&self) -> Option<Address> {
        if self.kind.is_received() {
            self.initiator
        } else {
            self.target
        }
    }
}

/// Node's answer to a payment request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub initiator_address: Address,
    pub target_address: Address,
    pub token_address: Address,
    pub amount: u64,
    pub identifier: u64,
}

#[derive(Serialize)]
struct PaymentRequest {
    amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<u64>,
}

/// `/payments` operations
pub struct Payments<'a> {
    client: &'a RaidenClient,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(client: &'a RaidenClient) -> Self {
        Self { client }
    }

    /// Payment events for the channel with `partner` on `token`
    pub async fn list(
        &self,
        ctx: &Context,
        token: Address,
        partner: Address,
    ) -> Result<Vec<Event>> {
        let endpoint = Endpoint::new("payments").segment(token).segment(partner);
        self.client.call(ctx, Method::Get, endpoint).await
    }

    /// Payment events across every token network
    pub async fn list_all(&self, ctx: &Context) -> Result<Vec<Event>> {
        self.client.call(ctx, Method::Get, Endpoint::new("payments")).await
    }

    /// Payment events on `token`
    pub async fn list_token(&self, ctx: &Context, token: Address) -> Result<Vec<Event>> {
        let endpoint = Endpoint::new("payments").segment(token);
        self.client.call(ctx, Method::Get, endpoint).await
    }

    /// Pay `amount` of `token` to `target`, optionally tagging it with `identifier`
    pub async fn send(
        &self,
        ctx: &Context,
        token: Address,
        target: Address,
        amount: u64,
        identifier: Option<u64>,
    ) -> Result<PaymentReceipt> {
        let endpoint = Endpoint::new("payments").segment(token).segment(target);
        let body = PaymentRequest { amount, identifier };
        self.client
            .call_with_body(ctx, Method::Post, endpoint, &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_names() {
        assert_eq!(
            serde_json::to_string(&EventKind::ReceivedSuccess).unwrap(),
            "\"EventPaymentReceivedSuccess\""
        );
        let kind: EventKind = serde_json::from_str("\"EventPaymentSentFailed\"").unwrap();
        assert_eq!(kind, EventKind::SentFailed);
        assert!(serde_json::from_str::<EventKind>("\"EventSomethingElse\"").is_err());
    }

    #[test]
    fn test_counterparty_follows_direction() {
        let received: Event = serde_json::from_str(
            r#"{"event":"EventPaymentReceivedSuccess","amount":5,"initiator":"0x82641569b2062B545431cF6D7F0A418582865ba7","identifier":1,"log_time":"2018-10-30T07:03:52.193Z"}"#,
        )
        .unwrap();
        assert_eq!(received.counterparty(), received.initiator);
        assert!(received.target.is_none());

        let failed: Event = serde_json::from_str(
            r#"{"event":"EventPaymentSentFailed","target":"0x82641569b2062B545431cF6D7F0A418582865ba7","identifier":4,"reason":"no route available","log_time":"2018-10-30T07:12:00Z"}"#,
        )
        .unwrap();
        assert_eq!(failed.amount, 0);
        assert_eq!(failed.counterparty(), failed.target);
        assert_eq!(failed.reason.as_deref(), Some("no route available"));
    }

    #[test]
    fn test_event_survives_reencoding() {
        let json = r#"{"event":"EventPaymentSentSuccess","amount":35,"target":"0x82641569b2062B545431cF6D7F0A418582865ba7","identifier":2,"log_time":"2018-10-30T07:04:22.293Z"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        let again: Event = serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(event, again);
    }

    #[test]
    fn test_payment_request_omits_missing_identifier() {
        let body = serde_json::to_string(&PaymentRequest {
            amount: 10,
            identifier: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"amount":10}"#);
    }

    #[test]
    fn test_payment_receipt_round_trip() {
        let receipt = PaymentReceipt {
            initiator_address: "0x82641569b2062b545431cf6d7f0a418582865ba7".parse().unwrap(),
            target_address: "0x61c808d82a3ac53231750dadc13c777b59310bd9".parse().unwrap(),
            token_address: "0xea674fdde714fd979de3edf0f56aa9716b898ec8".parse().unwrap(),
            amount: 200,
            identifier: 42,
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["token_address"], "0xEA674fdDe714fd979de3EdF0F56AA9716B898ec8");

        let decoded: PaymentReceipt = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, receipt);
    }
}
