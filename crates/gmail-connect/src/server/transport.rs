//! HTTP router and shared handler state.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::gmail::handlers::{handle_gmail_callback, handle_gmail_connect, html_response};
use super::gmail::pages::error_page;
use crate::config::Config;
use crate::error::CallbackError;

/// Shared state for HTTP handlers.
#[derive(Debug)]
pub struct HttpState {
    pub config: Config,
}

/// Create the HTTP router.
pub fn create_router(config: Config) -> Router {
    let state = Arc::new(HttpState { config });

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/api/gmail/callback", get(handle_gmail_callback))
        .route("/api/gmail/connect", get(handle_gmail_connect))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "gmail-connect",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Render the unexpected-error page for a handler panic.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(panic = %detail, "Handler panicked");

    html_response(StatusCode::INTERNAL_SERVER_ERROR, error_page(CallbackError::UNEXPECTED_MESSAGE))
}
