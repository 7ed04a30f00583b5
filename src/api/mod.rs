//! Typed operations, one module per API resource.

mod channels;
mod connections;
mod node;
mod payments;
mod pending_transfers;
mod tokens;

pub use channels::{Channel, ChannelState, Channels};
pub use connections::{Connection, Connections};
pub use node::Node;
pub use payments::{Event, EventKind, PaymentReceipt, Payments};
pub use pending_transfers::{PendingTransfers, Role, Transfer};
pub use tokens::{Partner, TokenNetwork, Tokens};
