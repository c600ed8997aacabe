//! Login page route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_page_handler, login_submit_handler};
use axum::{Router, routing::get};

/// Public login routes.
///
/// # Endpoints
///
/// - `GET /login` - Render the login page
/// - `POST /login` - Submit the form or toggle password visibility
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page_handler).post(login_submit_handler))
}
