//! HTTP client for the external session API.

use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::error::SessionApiError;
use crate::domain::entities::{Credentials, SessionGrant};

/// Success body of `POST /sessions`.
#[derive(Debug, Deserialize)]
struct SessionBody {
    token: Option<String>,
}

/// Failure body of `POST /sessions`.
///
/// Backends answer with one of `{"errors": [..]}`, `{"error": ".."}` or
/// `{"message": ".."}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
    error: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn into_messages(self) -> Vec<String> {
        let messages = if self.errors.is_empty() {
            self.error.or(self.message).into_iter().collect()
        } else {
            self.errors
        };

        messages.into_iter().filter(|m| !m.is_empty()).collect()
    }
}

/// Thin reqwest wrapper around the session API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SessionApiClient {
    http: reqwest::Client,
    base_url: Url,
    sessions_url: Url,
}

impl SessionApiClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// A trailing slash is added to the base path so that `sessions` resolves
    /// below it (`http://host/api/v1` → `http://host/api/v1/sessions`).
    ///
    /// # Errors
    ///
    /// Returns [`SessionApiError::InvalidUrl`] if `base_url` does not parse and
    /// [`SessionApiError::Client`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SessionApiError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let sessions_url = base_url.join("sessions")?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SessionApiError::Client)?;

        Ok(Self {
            http,
            base_url,
            sessions_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn sessions_url(&self) -> &Url {
        &self.sessions_url
    }

    /// Exchanges credentials for a session.
    ///
    /// # Errors
    ///
    /// - [`SessionApiError::Transport`] when the request fails or times out
    /// - [`SessionApiError::Upstream`] for any non-2xx answer, carrying the
    ///   messages found in the body
    ///
    /// A 2xx answer whose body cannot be decoded still counts as a session,
    /// without a token.
    #[tracing::instrument(name = "create_session", skip_all, fields(email = %credentials.email))]
    pub async fn create_session(
        &self,
        credentials: &Credentials,
    ) -> Result<SessionGrant, SessionApiError> {
        let response = self
            .http
            .post(self.sessions_url.clone())
            .json(credentials)
            .send()
            .await
            .map_err(SessionApiError::Transport)?;
        let status = response.status();

        if !status.is_success() {
            let messages = response
                .json::<ErrorBody>()
                .await
                .map(ErrorBody::into_messages)
                .unwrap_or_default();
            return Err(SessionApiError::Upstream { status, messages });
        }

        let token = response
            .json::<SessionBody>()
            .await
            .ok()
            .and_then(|body| body.token);

        Ok(SessionGrant { token })
    }

    /// Sends `GET` to the base URL and returns whatever status comes back.
    ///
    /// Any HTTP answer means the API is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`SessionApiError::Transport`] if no answer arrives.
    pub async fn ping(&self) -> Result<StatusCode, SessionApiError> {
        let response = self
            .http
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(SessionApiError::Transport)?;

        Ok(response.status())
    }
}
