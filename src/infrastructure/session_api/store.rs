//! [`SessionStore`] backed by the session API.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::client::SessionApiClient;
use crate::domain::entities::{Credentials, LoginOutcome};
use crate::domain::ports::SessionStore;

/// Authentication store for one page visit.
///
/// Login attempts go through [`SessionApiClient`]; the latest error messages
/// are kept in a list shared by all clones of this store.
#[derive(Clone)]
pub struct HttpSessionStore {
    client: SessionApiClient,
    errors: Arc<Mutex<Vec<String>>>,
}

impl HttpSessionStore {
    /// Creates a store with an empty error list.
    pub fn new(client: SessionApiClient) -> Self {
        Self::with_errors(client, Vec::new())
    }

    /// Creates a store holding messages carried over from a redirect.
    pub fn with_errors(client: SessionApiClient, errors: Vec<String>) -> Self {
        Self {
            client,
            errors: Arc::new(Mutex::new(errors)),
        }
    }
}

#[async_trait]
impl SessionStore for HttpSessionStore {
    async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        match self.client.create_session(credentials).await {
            Ok(session) => {
                self.errors.lock().await.clear();
                LoginOutcome::Authenticated(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "session API refused login");
                let messages = e.into_messages();
                *self.errors.lock().await = messages.clone();
                LoginOutcome::Rejected(messages)
            }
        }
    }

    async fn error_messages(&self) -> Vec<String> {
        self.errors.lock().await.clone()
    }

    async fn reset_error_state(&self) {
        self.errors.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> SessionApiClient {
        SessionApiClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap()
    }

    #[tokio::test]
    async fn test_carried_errors_are_visible() {
        let store = HttpSessionStore::with_errors(client(), vec!["Session expired".to_string()]);

        assert_eq!(store.error_messages().await, ["Session expired"]);
    }

    #[tokio::test]
    async fn test_reset_error_state_is_idempotent() {
        let store = HttpSessionStore::with_errors(client(), vec!["Session expired".to_string()]);

        store.reset_error_state().await;
        assert!(store.error_messages().await.is_empty());

        store.reset_error_state().await;
        assert!(store.error_messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_error_list() {
        let store = HttpSessionStore::with_errors(client(), vec!["Session expired".to_string()]);
        let other = store.clone();

        other.reset_error_state().await;

        assert!(store.error_messages().await.is_empty());
    }
}
