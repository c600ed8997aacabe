//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with upstream checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Session API reachable
/// - **503 Service Unavailable**: Session API did not answer
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "session_api": {
///       "status": "ok",
///       "message": "Reachable, answered 404 Not Found"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let session_api = check_session_api(&state).await;
    let healthy = session_api.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { session_api },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Any HTTP answer counts as reachable; only transport failures degrade.
async fn check_session_api(state: &AppState) -> CheckStatus {
    match state.session_api.ping().await {
        Ok(status) => CheckStatus::ok(format!("Reachable, answered {status}")),
        Err(e) => {
            tracing::warn!(error = %e, "Session API health check failed");
            CheckStatus::error(format!("Session API unreachable: {e}"))
        }
    }
}
