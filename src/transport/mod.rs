//! HTTP transport abstraction.

mod http;
mod mock;
mod traits;

pub use mock::MockTransport;
pub use traits::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
