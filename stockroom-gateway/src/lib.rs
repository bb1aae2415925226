//! HTTP gateway for the Stockroom resource service.
//!
//! Wires the core `ResourceHandler` into an axum router and maps typed
//! handler outcomes onto status codes and `{"error": ...}` bodies.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
