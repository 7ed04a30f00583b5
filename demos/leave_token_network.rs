//! Leave a token network and print the partners whose channels were closed.
//!
//! Usage: cargo run --example leave_token_network -- <token-address>
//!
//! The node is taken from RAIDEN_HOST / RAIDEN_API_VERSION (default
//! http://localhost:5001, v1). Set RUST_LOG=debug to see the requests.

use raiden_client::{Address, Config, Context, RaidenClient};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let token: Address = std::env::args()
        .nth(1)
        .ok_or("missing token address argument")?
        .parse()?;

    let config = Config::from_env()?;
    tracing::info!("Using Raiden node at {}", config.api_base());

    let client = RaidenClient::new(config)?;
    let ctx = Context::background().with_timeout(Duration::from_secs(60));

    let partners = client.connections().leave(&ctx, token).await?;
    tracing::info!("Left token network {} ({} channels closed)", token, partners.len());

    for partner in partners {
        println!("address: {partner}");
    }

    Ok(())
}
