//! Gateway binary: load config, bind the listener, serve until Ctrl-C.

use std::path::Path;

use tokio::net::TcpListener;

use proxy_gateway::config::loader;
use proxy_gateway::lifecycle::Shutdown;
use proxy_gateway::observability::logging;
use proxy_gateway::HttpServer;

/// Config file consulted at startup; defaults apply when it is absent.
const CONFIG_PATH: &str = "gateway.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = loader::load_or_default(Path::new(CONFIG_PATH))?;

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.origin,
        rules = config.rules.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    server.run(listener, receiver).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
