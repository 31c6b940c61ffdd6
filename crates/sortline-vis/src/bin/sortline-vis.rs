//! Sortline Visualization Server
//!
//! Serve a sorting session over HTTP and WebSocket.
//!
//! Usage: `sortline-vis [port] [array_size] [algorithm]`

use sortline_vis::{ServerConfig, VisServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortline_vis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_args(std::env::args().skip(1))?;

    tracing::info!(
        port = config.port,
        size = config.session.array_size,
        algorithm = %config.session.algorithm,
        "Starting Sortline visualizer"
    );

    let server = VisServer::new(config.session);
    server.serve(config.port).await?;

    Ok(())
}
