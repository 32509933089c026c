//! The contact form controller.
//!
//! [`ContactForm`] owns one visitor's draft and decides which of three
//! views they see: the editable form, the form with the failure banner, or
//! the confirmation. Field edits never validate; [`ContactForm::submit`]
//! gates on the required fields and is the only path to the relay.

use tracing::{info, warn};

use crate::errors::ContactError;
use crate::inquiry::{Field, InquiryDraft};
use crate::relay::FormRelay;
use crate::FAILURE_MESSAGE;

/// Why a submission failed. Visitors see only [`FAILURE_MESSAGE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The relay answered with a non-2xx status.
    Status(u16),
    /// No response arrived.
    Transport,
    /// The draft could not be encoded.
    Encoding,
}

impl FailureKind {
    /// Short label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Transport => "transport",
            Self::Encoding => "encoding",
        }
    }
}

/// Result of one call to [`ContactForm::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The relay accepted the inquiry.
    Delivered,
    /// The attempt failed; the draft is kept and the banner shown.
    Failed(FailureKind),
    /// Required fields were missing or malformed; nothing was sent.
    Blocked(Vec<Field>),
    /// Already confirmed; nothing was sent.
    Ignored,
}

impl SubmitOutcome {
    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Failed(_) => "failed",
            Self::Blocked(_) => "blocked",
            Self::Ignored => "ignored",
        }
    }
}

/// What the contact page should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactView<'a> {
    /// The editable form.
    Form {
        /// Current values.
        draft: &'a InquiryDraft,
        /// Banner text, if the last attempt failed.
        error: Option<&'static str>,
        /// Fields the last blocked attempt flagged.
        invalid: &'a [Field],
    },
    /// The thank-you panel.
    Confirmation,
}

/// One visitor's contact form.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    draft: InquiryDraft,
    submitted: bool,
    error: Option<&'static str>,
    invalid: Vec<Field>,
}

impl ContactForm {
    /// Empty draft, form view, no banner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from values a visitor already entered.
    pub fn from_draft(draft: InquiryDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    /// Replace one field's value. No validation beyond `inquiryType`
    /// membership.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), ContactError> {
        self.draft.set(field, value)
    }

    /// Send the draft through `relay`.
    ///
    /// Blocked and ignored attempts make no request and leave the banner
    /// as it was. A started attempt clears the banner first; success
    /// switches to the confirmation view, any failure shows
    /// [`FAILURE_MESSAGE`] and keeps the draft.
    pub async fn submit<R>(&mut self, relay: &R) -> SubmitOutcome
    where
        R: FormRelay + ?Sized,
    {
        if self.submitted {
            return SubmitOutcome::Ignored;
        }

        let invalid = self.draft.invalid_fields();
        if !invalid.is_empty() {
            self.invalid.clone_from(&invalid);
            return SubmitOutcome::Blocked(invalid);
        }
        self.invalid.clear();
        self.error = None;

        let body = match self.draft.encode() {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "failed to encode inquiry");
                return self.fail(FailureKind::Encoding);
            }
        };

        match relay.deliver(body).await {
            Ok(response) if response.is_success() => {
                info!(
                    status = response.status,
                    inquiry_type = %self.draft.inquiry_type,
                    "inquiry delivered"
                );
                self.submitted = true;
                SubmitOutcome::Delivered
            }
            Ok(response) => {
                warn!(status = response.status, "relay rejected inquiry");
                self.fail(FailureKind::Status(response.status))
            }
            Err(error) => {
                warn!(%error, "relay unreachable");
                self.fail(FailureKind::Transport)
            }
        }
    }

    fn fail(&mut self, kind: FailureKind) -> SubmitOutcome {
        self.error = Some(FAILURE_MESSAGE);
        SubmitOutcome::Failed(kind)
    }

    /// Leave the confirmation view for a fresh form. Returns `false`, and
    /// changes nothing, when the form was not confirmed.
    pub fn reset(&mut self) -> bool {
        if !self.submitted {
            return false;
        }
        *self = Self::default();
        true
    }

    /// Current values.
    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    /// Whether the relay confirmed the inquiry.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Banner text; empty when there is none.
    pub fn error(&self) -> &str {
        self.error.unwrap_or_default()
    }

    /// Fields flagged by the last blocked attempt.
    pub fn invalid_fields(&self) -> &[Field] {
        &self.invalid
    }

    /// What to render.
    pub fn view(&self) -> ContactView<'_> {
        if self.submitted {
            ContactView::Confirmation
        } else {
            ContactView::Form {
                draft: &self.draft,
                error: self.error,
                invalid: &self.invalid,
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
