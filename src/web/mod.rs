//! Web layer for the browser-facing login page.
//!
//! Runs a [`crate::application::controllers::LoginController`] per request
//! and renders its view with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Page rendering and form submission handlers
//! - [`in_flight`] - Per-email in-flight markers shared across requests
//! - [`navigator`] - Navigator that turns navigation into HTTP redirects
//! - [`routes`] - Login route configuration

pub mod handlers;
pub mod in_flight;
pub mod navigator;
pub mod routes;
