//! Navigation port.

/// View shown after a successful login.
pub const HOME_PATH: &str = "/";
/// Static link rendered below the form.
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
/// Static link rendered below the form.
pub const SIGNUP_PATH: &str = "/signup";

/// Imperative view transition.
///
/// Implementations decide what "moving" means: an HTTP redirect, a message in
/// a terminal, or a client-side route change.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Moves the user to `path`.
    fn go_to(&self, path: &str);
}
