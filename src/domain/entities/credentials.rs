//! Credentials entity submitted by the login form.

use serde::Serialize;
use std::fmt;

/// Message shown when either login field is left empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields";

/// Email and password pair entered on the login page.
///
/// Values are kept exactly as typed: no trimming, no case folding. The only
/// rule enforced before submission is that neither value is empty.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Creates a credentials pair from raw field values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns true if either field is empty.
    ///
    /// Whitespace-only values count as filled in.
    pub fn is_incomplete(&self) -> bool {
        self.email.is_empty() || self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
