//! # agcp-content
//!
//! Every piece of copy the site renders that comes as a list or a record:
//! company facts, navigation, platform specs, pipelines, leadership bios.
//! All of it is `'static` and read-only; page renderers own the prose that
//! appears exactly once.

#![deny(unsafe_code)]

pub mod about;
pub mod applications;
pub mod company;
pub mod home;
pub mod meta;
pub mod navigation;
pub mod partnership;
pub mod platforms;
pub mod science;
pub mod types;

pub use company::{ADDRESS_LINES, COMPANY, Company, FOUNDERS};
pub use types::*;
