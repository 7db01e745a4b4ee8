//! HTTP server: router assembly and graceful serve loop

use axum::{routing::get, Json, Router};
use bank_service::BankServiceModule;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const SERVICE_NAME: &str = "bank-server";

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

/// Full application router: health, module routes, CORS and request tracing
pub fn build_router(module: &BankServiceModule) -> anyhow::Result<Router> {
    let router = Router::new().route("/health", get(health));
    let router = module.register_rest(router)?;

    Ok(router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()))
}

/// Serve until `cancel` fires, then drain in-flight requests
pub async fn serve(listener: TcpListener, router: Router, cancel: CancellationToken) -> anyhow::Result<()> {
    tracing::info!("bank-server REST listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    tracing::info!("bank-server stopped");
    Ok(())
}

/// Cancel `token` on Ctrl-C or SIGTERM
pub fn spawn_shutdown_listener(token: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to listen for SIGTERM");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        tracing::info!("shutdown signal received");
        token.cancel();
    });
}
