//! Page controllers driving user-facing workflows.

pub mod login;

pub use login::{Field, LoginController, LoginView, Submission, SubmitOutcome};
