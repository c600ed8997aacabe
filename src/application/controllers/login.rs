//! Login submission controller.
//!
//! Owns the transient state of one login page visit and runs the submission
//! workflow against a [`SessionStore`], moving on through a [`Navigator`] when
//! the store accepts the credentials.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::entities::{Credentials, LoginOutcome, MISSING_FIELDS_MESSAGE, SessionGrant};
use crate::domain::ports::{FORGOT_PASSWORD_PATH, HOME_PATH, Navigator, SIGNUP_PATH, SessionStore};

/// Shown when the store rejects a login without saying why.
pub const GENERIC_REJECTION_MESSAGE: &str = "Unable to sign in, please try again";

/// Input field that can receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// First phase of a submission, see [`LoginController::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed; errors are set and nothing was sent.
    Invalid,
    /// Another submission is still in flight; nothing changed.
    Busy,
    /// Credentials are ready to be sent to the store.
    Dispatch(Credentials),
}

/// Final result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Busy,
    /// The navigator was sent to `path`.
    Navigated {
        path: &'static str,
        session: SessionGrant,
    },
    /// The store refused; the page shows its messages.
    Rejected,
}

/// Render model of the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub errors: Vec<String>,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    /// `type` attribute of the password input.
    pub password_input_type: &'static str,
    pub focus: Option<Field>,
    pub submit_disabled: bool,
    pub forgot_password_path: &'static str,
    pub signup_path: &'static str,
}

/// Controller for a single login page visit.
///
/// Field values are bound through [`set_email`](Self::set_email) and
/// [`set_password`](Self::set_password). Submission errors are non-empty
/// exactly when the latest attempt did not navigate away.
///
/// The in-flight flag is private to the controller unless one is shared in
/// with [`with_in_flight_flag`](Self::with_in_flight_flag), which lets hosts
/// that build a controller per request refuse overlapping submissions.
pub struct LoginController<S: SessionStore, N: Navigator> {
    store: Arc<S>,
    navigator: Arc<N>,
    email: String,
    password: String,
    errors: Vec<String>,
    show_password: bool,
    in_flight: Arc<AtomicBool>,
    focus: Option<Field>,
    mounted: bool,
}

impl<S: SessionStore, N: Navigator> LoginController<S, N> {
    /// Creates a controller with empty fields.
    ///
    /// # Arguments
    ///
    /// - `store` - authentication store answering login attempts
    /// - `navigator` - moves the user away after a successful login
    pub fn new(store: Arc<S>, navigator: Arc<N>) -> Self {
        Self {
            store,
            navigator,
            email: String::new(),
            password: String::new(),
            errors: Vec::new(),
            show_password: false,
            in_flight: Arc::new(AtomicBool::new(false)),
            focus: None,
            mounted: false,
        }
    }

    /// Shares `flag` as the in-flight marker of this controller.
    pub fn with_in_flight_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.in_flight = flag;
        self
    }

    /// Runs the first-display logic of the page.
    ///
    /// Adopts any error messages already held by the store and tells the store
    /// to drop its copy, then requests focus on the email field. Only the first
    /// call on a controller has any effect.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.focus = Some(Field::Email);

        let carried = self.store.error_messages().await;
        if !carried.is_empty() {
            tracing::debug!(count = carried.len(), "adopting carried-over login errors");
            self.errors = carried;
            self.store.reset_error_state().await;
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Validates the bound fields and marks the submission as in flight.
    ///
    /// Errors are cleared first. Empty fields produce
    /// [`MISSING_FIELDS_MESSAGE`] and [`Submission::Invalid`]. While a previous
    /// submission is in flight nothing happens and [`Submission::Busy`] is
    /// returned.
    pub fn begin_submit(&mut self) -> Submission {
        if self.is_submitting() {
            return busy();
        }

        self.errors.clear();

        let credentials = Credentials::new(self.email.clone(), self.password.clone());
        if credentials.is_incomplete() {
            self.errors.push(MISSING_FIELDS_MESSAGE.to_string());
            metrics::counter!("login_submissions_total", "outcome" => "invalid").increment(1);
            return Submission::Invalid;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return busy();
        }
        Submission::Dispatch(credentials)
    }

    /// Applies the store's answer to a dispatched submission.
    pub async fn complete_submit(&mut self, outcome: LoginOutcome) -> SubmitOutcome {
        self.in_flight.store(false, Ordering::SeqCst);

        match outcome {
            LoginOutcome::Authenticated(session) => {
                tracing::debug!(email = %self.email, "login accepted");
                metrics::counter!("login_submissions_total", "outcome" => "authenticated")
                    .increment(1);
                self.errors.clear();
                self.navigator.go_to(HOME_PATH);
                SubmitOutcome::Navigated {
                    path: HOME_PATH,
                    session,
                }
            }
            LoginOutcome::Rejected(messages) => {
                tracing::debug!(email = %self.email, count = messages.len(), "login rejected");
                metrics::counter!("login_submissions_total", "outcome" => "rejected").increment(1);
                self.errors = if messages.is_empty() {
                    vec![GENERIC_REJECTION_MESSAGE.to_string()]
                } else {
                    messages
                };
                // The page now owns these messages; a later mount must not show them again.
                self.store.reset_error_state().await;
                SubmitOutcome::Rejected
            }
        }
    }

    /// Submits the bound email and password.
    ///
    /// Equivalent to [`begin_submit`](Self::begin_submit), a store call with
    /// the dispatched credentials, then
    /// [`complete_submit`](Self::complete_submit).
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.begin_submit() {
            Submission::Invalid => SubmitOutcome::Invalid,
            Submission::Busy => SubmitOutcome::Busy,
            Submission::Dispatch(credentials) => {
                // Released even if this future is dropped while waiting on the store.
                let _release = InFlightRelease(Arc::clone(&self.in_flight));
                let outcome = self.store.login(&credentials).await;
                self.complete_submit(outcome).await
            }
        }
    }

    /// Builds the render model for the current state.
    pub fn view(&self) -> LoginView {
        LoginView {
            errors: self.errors.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            show_password: self.show_password,
            password_input_type: if self.show_password { "text" } else { "password" },
            focus: self.focus,
            submit_disabled: self.is_submitting(),
            forgot_password_path: FORGOT_PASSWORD_PATH,
            signup_path: SIGNUP_PATH,
        }
    }
}

fn busy() -> Submission {
    metrics::counter!("login_submissions_total", "outcome" => "busy").increment(1);
    Submission::Busy
}

struct InFlightRelease(Arc<AtomicBool>);

impl Drop for InFlightRelease {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
