//! Wayfarer HTTP Server
//!
//! Main entry point for the delivery estimator API.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::{DeliveryService, EmailLocationService};
use axum::http::{HeaderValue, Method};
use infrastructure::{AppConfig, Providers, ServerConfig, init_telemetry};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    map_response_body::MapResponseBodyLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first: it decides the log format
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_telemetry(&config.server)?;

    info!("🚚 Wayfarer v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.estimate.model,
        attempt_timeout_secs = config.delivery.attempt_timeout_secs,
        "Configuration loaded"
    );

    let providers = Providers::from_config(&config)?;
    let attempt_timeout = config.delivery.attempt_timeout();

    let delivery_service = DeliveryService::new(providers.primary, providers.fallback)
        .with_attempt_timeout(attempt_timeout);
    let email_service =
        EmailLocationService::new(providers.guesser).with_attempt_timeout(attempt_timeout);

    let state = AppState {
        delivery_service: Arc::new(delivery_service),
        email_service: Arc::new(email_service),
    };

    let app = routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server))
            .layer(MapResponseBodyLayer::new(axum::body::Body::new))
            .layer(RequestBodyLimitLayer::new(config.server.max_body_size_bytes)),
    );

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signalled_tx.send(());
    });

    // Connections still open after the timeout are dropped
    let deadline = async move {
        if signalled_rx.await.is_ok() {
            info!("⏳ Waiting up to {:?} for connections to close...", shutdown_timeout);
            tokio::time::sleep(shutdown_timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server.into_future() => result?,
        () = deadline => warn!("Shutdown timeout elapsed, closing remaining connections"),
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// CORS: any origin when none are configured, otherwise the configured list
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.cors_allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
