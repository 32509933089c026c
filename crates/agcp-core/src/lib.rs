//! # agcp-core
//!
//! Foundation pieces every other AGCP crate leans on:
//!
//! - **Constants**: package name and version baked in at compile time
//! - **Logging**: one-shot `tracing` subscriber setup plus an in-memory
//!   capture layer for asserting on log output in tests

#![deny(unsafe_code)]

pub mod constants;
pub mod logging;

pub use constants::{NAME, VERSION};
