//! Domain layer: login entities and the ports the login page depends on.
//!
//! # Architecture
//!
//! - [`entities`] - Credentials and authentication outcomes
//! - [`ports`] - Authentication store and navigator traits
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Port traits define contracts implemented by the infrastructure and web layers
//! - Workflow logic lives in [`crate::application::controllers`]

pub mod entities;
pub mod ports;
