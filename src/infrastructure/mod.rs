//! Infrastructure layer for external integrations.
//!
//! Implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`session_api`] - HTTP client and store for the external session API

pub mod session_api;
