//! Port traits for the collaborators of the login page.
//!
//! The controller in [`crate::application::controllers`] depends only on these
//! traits. Concrete adapters live elsewhere:
//!
//! - [`SessionStore`] - implemented by
//!   [`crate::infrastructure::session_api::HttpSessionStore`]
//! - [`Navigator`] - implemented by [`crate::web::navigator::RedirectNavigator`]
//!   for HTTP and by the terminal client in `src/bin/signin.rs`
//!
//! # Testing
//!
//! Mock implementations are generated with `mockall` under `cfg(test)`.

pub mod navigator;
pub mod session_store;

pub use navigator::{FORGOT_PASSWORD_PATH, HOME_PATH, Navigator, SIGNUP_PATH};
pub use session_store::SessionStore;

#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use session_store::MockSessionStore;
