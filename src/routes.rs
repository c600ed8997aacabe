//! Top-level router combining the login page and the health check.
//!
//! # Route Structure
//!
//! - `GET  /login`  - Login page, carried-over error codes via `?error=`
//! - `POST /login`  - Login form submission
//! - `GET  /health` - Session API reachability
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/login` (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are unusable.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let web_public = web::routes::public_routes().layer(rate_limit::login_layer(config)?);

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(web_public)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
