//! Transient entities of a single login page visit.
//!
//! Nothing here is persisted: credentials live for one submission and the
//! outcome is consumed by the controller that asked for it.
//!
//! # Entity Types
//!
//! - [`Credentials`] - Email and password as typed by the user
//! - [`LoginOutcome`] - Tagged success/failure of an authentication attempt
//! - [`SessionGrant`] - Session material returned on success

pub mod credentials;
pub mod outcome;

pub use credentials::{Credentials, MISSING_FIELDS_MESSAGE};
pub use outcome::{LoginOutcome, SessionGrant};
