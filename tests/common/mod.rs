#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use login_portal::infrastructure::session_api::{HttpSessionStore, SessionApiClient};
use login_portal::state::AppState;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const VALID_EMAIL: &str = "a@b.com";
pub const VALID_PASSWORD: &str = "pw";
pub const TOKEN: &str = "tok-123";
pub const SLOW_LOGIN: Duration = Duration::from_millis(300);

/// Session API stand-in listening on an ephemeral port.
///
/// `POST /api/v1/sessions` answers by email:
/// - `a@b.com` / `pw` → 200 with a token
/// - `no-token@b.com` → 204 without a body
/// - `slow@b.com` → 200 with a token after [`SLOW_LOGIN`]
/// - `multi@b.com` → 422 with two messages
/// - `locked@b.com` → 423 with `{"error": ..}`
/// - `crash@b.com` → 500 without a body
/// - anything else → 401 with `{"errors": ["Invalid credentials"]}`
pub struct FakeSessionApi {
    pub base_url: String,
    calls: Arc<AtomicUsize>,
}

impl FakeSessionApi {
    pub async fn start() -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/api/v1/sessions", post(create_session))
            .with_state(Arc::clone(&calls));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api/v1"),
            calls,
        }
    }

    /// Number of `POST /sessions` requests received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Deserialize)]
struct SessionRequest {
    email: String,
    password: String,
}

async fn create_session(
    State(calls): State<Arc<AtomicUsize>>,
    Json(body): Json<SessionRequest>,
) -> impl IntoResponse {
    calls.fetch_add(1, Ordering::SeqCst);

    match (body.email.as_str(), body.password.as_str()) {
        (VALID_EMAIL, VALID_PASSWORD) => {
            (StatusCode::OK, Json(json!({ "token": TOKEN }))).into_response()
        }
        ("no-token@b.com", _) => StatusCode::NO_CONTENT.into_response(),
        ("slow@b.com", _) => {
            tokio::time::sleep(SLOW_LOGIN).await;
            (StatusCode::OK, Json(json!({ "token": TOKEN }))).into_response()
        }
        ("multi@b.com", _) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": ["Email not verified", "Contact support"] })),
        )
            .into_response(),
        ("locked@b.com", _) => (
            StatusCode::LOCKED,
            Json(json!({ "error": "Account locked" })),
        )
            .into_response(),
        ("crash@b.com", _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "errors": ["Invalid credentials"] })),
        )
            .into_response(),
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v1")
}

pub fn create_test_client(base_url: &str) -> SessionApiClient {
    SessionApiClient::new(base_url, Duration::from_secs(2)).unwrap()
}

pub fn create_test_store(base_url: &str) -> HttpSessionStore {
    HttpSessionStore::new(create_test_client(base_url))
}

pub fn create_test_state(base_url: &str) -> AppState {
    AppState::new(create_test_client(base_url), false)
}
