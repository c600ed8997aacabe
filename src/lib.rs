//! # Login Portal
//!
//! Server-rendered login page that authenticates against an external
//! session API, built with Axum and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Credentials, login outcomes and the ports the controller drives
//! - **Application Layer** ([`application`]) - The login page controller
//! - **Infrastructure Layer** ([`infrastructure`]) - Session API client and store
//! - **API Layer** ([`api`]) - Health endpoint, rate limiting and tracing middleware
//! - **Web Layer** ([`web`]) - HTML login page
//!
//! ## Quick Start
//!
//! ```bash
//! export SESSION_API_URL="http://localhost:3001/api/v1"
//! cargo run
//! # then open http://localhost:3000/login
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::controllers::{LoginController, SubmitOutcome};
    pub use crate::domain::entities::{Credentials, LoginOutcome, SessionGrant};
    pub use crate::domain::ports::{Navigator, SessionStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::session_api::{HttpSessionStore, SessionApiClient};
    pub use crate::state::AppState;
}
