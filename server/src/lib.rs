//! # Location Search Proxy
//!
//! Single-endpoint relay between the dashboard frontend and the SerpAPI
//! maps search. The provider key never reaches the browser: the proxy
//! attaches it server-side, forwards the query, and returns the
//! upstream JSON body untouched.
//!
//! The proxy holds no state between requests beyond a reused HTTP
//! client. Retry policy, normalization, and region filtering are the
//! caller's concern (see the `locations` crate).
//!
//! ## Endpoints
//! - `GET /api/search-locations` — the relay; `q` is required.
//! - `GET /health` — liveness, independent of the provider.
use std::time::Duration;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod upstream;

use routes::{health_handler, search_locations_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .frontend_origin
                .parse::<HeaderValue>()
                .expect("Invalid FRONTEND_URL"),
        )
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/api/search-locations", get(search_locations_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(Extension(state.clone()));

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
