//! # agcp-contact
//!
//! The contact form: an [`InquiryDraft`] edited field by field, a
//! [`ContactForm`] controller that gates and submits it, and the
//! [`FormRelay`] seam the submission travels through.
//!
//! A submission is one `application/x-www-form-urlencoded` POST to the
//! relay's root path. Any 2xx confirms it; every other outcome shows the
//! visitor [`FAILURE_MESSAGE`] and keeps the draft for another attempt.

#![deny(unsafe_code)]

pub mod errors;
pub mod form;
pub mod inquiry;
pub mod relay;

pub use errors::{ContactError, RelayError};
pub use form::{ContactForm, ContactView, FailureKind, SubmitOutcome};
pub use inquiry::{Field, InquiryDraft, InquiryType};
pub use relay::{FormRelay, HttpFormRelay, RelayResponse};

/// Value of the `form-name` key the relay routes submissions by.
pub const FORM_NAME: &str = "contact";

/// Honeypot key. Humans never see the input, so it travels empty.
pub const HONEYPOT_FIELD: &str = "bot-field";

/// The only failure text a visitor ever sees.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again or email us directly.";
