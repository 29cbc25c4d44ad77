//! # casad — casa daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the controller forwarder (adapter)
//! - Construct the house service, injecting the forwarder via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use casa_adapter_controller_http::HttpForwarder;
use casa_adapter_http_axum::router;
use casa_adapter_http_axum::state::AppState;
use casa_app::services::house_service::HouseService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter).context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Controller
    let forwarder =
        HttpForwarder::new(&config.controller).context("failed to build controller client")?;
    if forwarder.is_enabled() {
        tracing::info!(base_url = %config.controller.base_url, "forwarding commands to controller");
    } else {
        tracing::info!("forwarding to controller disabled");
    }

    // Services
    let house_service = HouseService::new(forwarder);

    // HTTP
    let app = router::build(AppState::new(house_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "casad listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("casad stopped");
    Ok(())
}

/// Resolve on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
