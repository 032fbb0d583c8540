//! Precast Catalog JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use precast_app::context::AppContext;

use crate::{auth::AdminToken, config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod extensions;
mod healthcheck;
mod landing;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Precast Catalog JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    observability::set_slow_request_threshold_ms(config.logging.slow_request_threshold_ms);

    let app = match AppContext::from_config(&config.store) {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let state = State::shared(app, AdminToken::new(&config.admin.admin_token));

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router::build(state)).await;
}
