// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use fhevm_server::{
    api::router,
    config::{DEFAULT_RATE_LIMIT_WINDOW_SECS, RATE_LIMIT_MAX_ENV},
    fhevm::{FhevmClient, FhevmClientConfig},
    keys::KeyManager,
    security::RateLimiter,
    state::AppState,
};

#[tokio::main]
async fn main() {
    init_tracing();

    // Connect the gateway client when a deployment is configured; the mock
    // routes work without it.
    let fhevm = match FhevmClientConfig::from_env() {
        Ok(Some(config)) => match FhevmClient::connect(config).await {
            Ok(client) => {
                tracing::info!(chain_id = client.chain_id(), "connected FHEVM gateway client");
                Some(client)
            }
            Err(e) => {
                tracing::warn!("failed to connect FHEVM gateway client: {e}");
                None
            }
        },
        Ok(None) => {
            tracing::info!("FHEVM_RPC_URL not set, running mock-only");
            None
        }
        Err(e) => {
            tracing::warn!("invalid FHEVM configuration: {e}");
            None
        }
    };

    let limiter = match env::var(RATE_LIMIT_MAX_ENV).ok().and_then(|v| v.parse().ok()) {
        Some(max) => RateLimiter::new(
            max,
            std::time::Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        ),
        None => RateLimiter::default(),
    };

    let state = AppState::new(KeyManager::new(), limiter, fhevm);
    let app = router(state);

    // Parse bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("FHEVM API server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
