//! Raiden Client Library
//!
//! Typed access to a Raiden node's REST management API:
//! - Address codec (`Address`)
//! - `RaidenClient` over an injectable `HttpTransport`
//! - Per-call cancellation (`Context`)
//! - `MockTransport` for tests

pub mod address;
pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod request;
pub mod transport;

pub use address::{Address, AddressError};
pub use api::{
    Channel, ChannelState, Connection, Event, EventKind, Partner, PaymentReceipt, Role,
    TokenNetwork, Transfer,
};
pub use client::RaidenClient;
pub use config::Config;
pub use context::{CancelHandle, Context};
pub use error::{RaidenError, Result};
pub use transport::{HttpTransport, Method, MockTransport, TransportError};
