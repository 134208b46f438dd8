//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the dashboard page, its JSON twin, and the form actions
//! under a single Axum router. Request spans come from `TraceLayer`.

pub mod auth;
pub mod dashboard;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_dashboard))
        .route("/dashboard", get(dashboard::dashboard_page))
        .route("/dashboard/passwords", post(dashboard::create_password))
        .route("/dashboard/passwords/{id}/category", post(dashboard::move_password))
        .route("/api/dashboard", get(dashboard::dashboard_json))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_dashboard() -> Redirect {
    Redirect::temporary("/dashboard")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
