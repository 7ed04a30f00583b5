//! Shared helpers for the integration tests.

#![allow(dead_code)]

use raiden_client::{Address, Config, MockTransport, RaidenClient};
use std::sync::Arc;

pub const HOST: &str = "http://localhost:5001";

/// Client against the default local node, backed by `transport`
pub fn mock_client(transport: &MockTransport) -> RaidenClient {
    let config = Config::new(HOST, "v1").expect("valid config");
    RaidenClient::with_transport(config, Arc::new(transport.clone()))
}

pub fn addr(s: &str) -> Address {
    s.parse().expect("valid address")
}

pub fn url(path: &str) -> String {
    format!("{HOST}/api/v1/{path}")
}
