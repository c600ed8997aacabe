//! Application layer: workflows that coordinate domain ports.
//!
//! Controllers hold the transient state of one page visit and talk to the
//! outside world only through the traits in [`crate::domain::ports`].
//!
//! # Available Controllers
//!
//! - [`controllers::login::LoginController`] - Login form validation and submission

pub mod controllers;
