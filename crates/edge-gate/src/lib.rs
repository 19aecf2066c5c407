//! # Hotel Dashboard Edge Gate
//!
//! Serves the static dashboard pages behind a signed cookie session.

pub mod auth;
pub mod config;
pub mod handlers;
pub mod routes;
pub mod security;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod utils;
