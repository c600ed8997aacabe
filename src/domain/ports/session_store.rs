//! Authentication store port.

use crate::domain::entities::{Credentials, LoginOutcome};
use async_trait::async_trait;

/// Facade over the authentication backend.
///
/// Besides answering login attempts, a store keeps a shared list of error
/// messages. Other parts of the application can leave messages there before
/// redirecting to the login page; the page adopts them once on mount.
///
/// # Implementations
///
/// - [`crate::infrastructure::session_api::HttpSessionStore`] - session API over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Submits credentials to the backend.
    ///
    /// Resolves once the backend answers. As a side effect the shared error
    /// list is replaced: emptied on success, filled with the rejection
    /// messages on failure.
    async fn login(&self, credentials: &Credentials) -> LoginOutcome;

    /// Returns a snapshot of the shared error list.
    async fn error_messages(&self) -> Vec<String>;

    /// Clears the shared error list. Idempotent.
    async fn reset_error_state(&self);
}
