//! One renderer per route. Each returns the `<main>` content only;
//! [`crate::layout::document`] adds the shell.

pub mod about;
pub mod applications;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod partnership;
pub mod science;
pub mod technology;
