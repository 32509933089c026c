//! # agcp-server
//!
//! The HTTP face of the site: an axum [`Router`](axum::Router) that renders
//! every page, runs contact submissions through a [`FormRelay`](agcp_contact::FormRelay),
//! serves the embedded stylesheet and script, and falls back to the public
//! directory for images.
//!
//! Operational endpoints (`/health`, `/metrics`) and graceful shutdown ride
//! along.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod health;
pub mod metrics;
pub mod server;

pub use config::ServerConfig;
pub use error::ServerError;
pub use server::{AppState, SiteServer};
