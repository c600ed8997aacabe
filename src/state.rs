use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::infrastructure::session_api::{HttpSessionStore, SessionApiClient};
use crate::web::in_flight::InFlightLogins;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub session_api: SessionApiClient,
    /// Adds `Secure` to the session cookie.
    pub secure_cookies: bool,
    /// In-flight markers keyed by email, shared across requests.
    pub in_flight: InFlightLogins,
}

impl AppState {
    pub fn new(session_api: SessionApiClient, secure_cookies: bool) -> Self {
        Self {
            session_api,
            secure_cookies,
            in_flight: InFlightLogins::new(),
        }
    }

    /// In-flight flag shared by every submission for `email`.
    pub fn submit_flag(&self, email: &str) -> Arc<AtomicBool> {
        self.in_flight.flag_for(email)
    }

    /// Builds the store for one page visit, seeded with carried-over messages.
    pub fn session_store(&self, carried_errors: Vec<String>) -> HttpSessionStore {
        HttpSessionStore::with_errors(self.session_api.clone(), carried_errors)
    }
}
