//! Session API error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the backend refuses credentials without explaining why.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
/// Shown when the backend fails for any other reason.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Something went wrong, please try again";
/// Shown when the backend cannot be reached or does not answer in time.
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server, please try again";

/// Errors that can occur while talking to the session API.
#[derive(Debug, Error)]
pub enum SessionApiError {
    #[error("invalid session API url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build session API client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("session API transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("session API responded with {status}")]
    Upstream {
        status: StatusCode,
        /// Messages decoded from the response body, possibly empty.
        messages: Vec<String>,
    },
}

impl SessionApiError {
    /// Converts the error into messages fit for the login page.
    ///
    /// Messages sent by the backend win. Without them, `401`/`403` become
    /// [`INVALID_CREDENTIALS_MESSAGE`] and every other failure a generic
    /// message.
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::Upstream { messages, .. } if !messages.is_empty() => messages,
            Self::Upstream { status, .. }
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
            {
                vec![INVALID_CREDENTIALS_MESSAGE.to_string()]
            }
            Self::Upstream { .. } | Self::InvalidUrl(_) | Self::Client(_) => {
                vec![UPSTREAM_FAILURE_MESSAGE.to_string()]
            }
            Self::Transport(_) => vec![UNREACHABLE_MESSAGE.to_string()],
        }
    }
}
