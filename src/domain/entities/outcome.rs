//! Result of a single authentication attempt.

/// Session material handed back by a successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGrant {
    /// Opaque session token, when the backend issues one.
    pub token: Option<String>,
}

/// Tagged outcome of [`crate::domain::ports::SessionStore::login`].
///
/// Callers branch on this value rather than on any shared store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(SessionGrant),
    /// Display messages explaining the rejection, in backend order.
    Rejected(Vec<String>),
}

impl LoginOutcome {
    /// Builds a rejection carrying a single message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(vec![message.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_single_message() {
        let outcome = LoginOutcome::rejected("Invalid credentials");

        assert_eq!(
            outcome,
            LoginOutcome::Rejected(vec!["Invalid credentials".to_string()])
        );
    }

    #[test]
    fn test_default_grant_has_no_token() {
        assert_eq!(SessionGrant::default().token, None);
    }
}
