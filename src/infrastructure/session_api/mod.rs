//! Session API integration.
//!
//! - [`SessionApiClient`] - reqwest client for `POST /sessions`
//! - [`HttpSessionStore`] - [`crate::domain::ports::SessionStore`] built on the client
//! - [`SessionApiError`] - transport and upstream failures, mapped to display messages

pub mod client;
pub mod error;
pub mod store;

pub use client::SessionApiClient;
pub use error::SessionApiError;
pub use store::HttpSessionStore;
