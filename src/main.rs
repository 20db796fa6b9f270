use std::sync::{Arc, Mutex};

use tracing::{error, info};

use echorelay::config::load_config;
use echorelay::relay::Hub;
use echorelay::transport::websocket::start_websocket_server;
use echorelay::utils::error::RelayError;
use echorelay::utils::logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init("info");

    if let Err(e) = run().await {
        error!("server failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RelayError> {
    let config = load_config()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let hub = Arc::new(Mutex::new(Hub::new()));

    tokio::select! {
        result = start_websocket_server(&addr, hub, config) => {
            result?;
            error!("WebSocket server exited unexpectedly.");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }

    Ok(())
}
