//! Tagchat API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tagchat-api
//! ```
//!
//! Configuration is loaded from environment variables (see `.env`).

use tagchat_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(config.app.env);
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.server.port,
        backing = ?config.backing,
        "Configuration loaded"
    );

    tagchat_api::run(config).await?;

    Ok(())
}
