//! HTTP server for bankdash.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;
mod pages;
mod route_guard;

use axum::{
    Json, Router,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use bankdash_core::AuthConfig;
use bankdash_core::constants::{
    BRAND_LOGO_PATH, DASHBOARD_PATH, DEFAULT_PROTECTED_PATH, FORM_REDIRECT_DELAY_MS, LOGIN_PATH,
};
use bankdash_core::env_parse_with_default;

pub use api_types::{ChartsRequest, MessageResponse, ValidateResponse, VersionResponse};
pub use route_guard::route_guard;

/// Shared, read-only application state.
///
/// Nothing here changes after startup; there is no server-side session or
/// record storage.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The accepted credential pair and cookie options
    pub auth: AuthConfig,
    /// Delay before the form page navigates to the dashboard
    pub form_redirect_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self { auth: AuthConfig::default(), form_redirect_ms: FORM_REDIRECT_DELAY_MS }
    }
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            auth: AuthConfig::from_env(),
            form_redirect_ms: env_parse_with_default(
                "BANKDASH_FORM_REDIRECT_MS",
                FORM_REDIRECT_DELAY_MS,
            ),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(LOGIN_PATH, get(pages::login_page))
        .route(DEFAULT_PROTECTED_PATH, get(pages::bank_form_page))
        .route(DASHBOARD_PATH, get(pages::dashboard_page))
        .route("/static/app.css", get(pages::app_css))
        .route("/static/app.js", get(pages::app_js))
        .route(BRAND_LOGO_PATH, get(pages::brand_logo))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/bank-details/validate", post(handlers::bank_details::validate_bank_details))
        .route("/api/dashboard/charts", post(handlers::dashboard::charts))
        .layer(middleware::from_fn(route_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
