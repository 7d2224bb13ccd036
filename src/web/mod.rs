//! HTTP front end: router, shared state, error pages and the serve loop.

pub mod handlers;
pub mod session;
pub mod views;

use crate::config::Config;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use axum::Router;
use axum::extract::FromRef;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum_extra::extract::cookie::Key;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Shared application state, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub key: Key,
}

impl AppState {
    pub fn new(store: Store, secret_key: &str) -> Self {
        Self {
            store,
            key: session::signing_key(secret_key),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::login_form).post(handlers::login))
        .route("/logout", get(handlers::logout))
        .route("/list", get(handlers::shopping_list))
        .route("/items/add", post(handlers::add_item))
        .route("/items/clear_done", post(handlers::clear_done))
        .route("/items/{id}/toggle", post(handlers::toggle_item))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ItemNotFound(_) | AppError::NotFound => StatusCode::NOT_FOUND,
            _ => {
                tracing::error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let reason = status.canonical_reason().unwrap_or("Error");
        (status, Html(views::error_page(status.as_u16(), reason))).into_response()
    }
}

/// Open the database, bind and serve until Ctrl+C / SIGTERM.
pub async fn serve(cfg: &Config) -> AppResult<()> {
    let addr: SocketAddr = cfg
        .bind
        .parse()
        .map_err(|e| AppError::Config(format!("invalid bind address '{}': {e}", cfg.bind)))?;

    let store = Store::open(&cfg.database)?;
    info(format!("Database: {}", store.path().display()));

    if cfg.uses_default_secret() {
        warning("Using the built-in session secret. Set SECRET_KEY before exposing this server.");
        tracing::warn!("default SECRET_KEY in use; sessions can be forged");
    }

    let app = router(AppState::new(store, &cfg.secret_key));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "starting shoplist server");
    success(format!("Listening on http://{addr}  (Ctrl+C to stop)"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info("Received Ctrl+C, shutting down..."),
        () = terminate => info("Received SIGTERM, shutting down..."),
    }
}
