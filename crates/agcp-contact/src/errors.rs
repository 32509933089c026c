//! Contact form error types.

use thiserror::Error;

/// Errors raised while editing or encoding a draft.
#[derive(Debug, Error)]
pub enum ContactError {
    /// `inquiryType` outside the enumerated set.
    #[error("unknown inquiry type: {0:?}")]
    UnknownInquiryType(String),
    /// The draft could not be form-encoded.
    #[error("failed to encode inquiry: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Errors raised by a [`crate::FormRelay`].
#[derive(Debug, Error)]
pub enum RelayError {
    /// The configured relay URL is unusable.
    #[error("invalid relay url {url:?}: {message}")]
    InvalidEndpoint {
        /// Offending URL.
        url: String,
        /// Parser message.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build relay client: {0}")]
    Client(String),
    /// The request never produced a response.
    #[error("relay request failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_inquiry_type_display() {
        let err = ContactError::UnknownInquiryType("Sales".into());
        assert_eq!(err.to_string(), "unknown inquiry type: \"Sales\"");
    }

    #[test]
    fn transport_display() {
        let err = RelayError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn invalid_endpoint_display() {
        let err = RelayError::InvalidEndpoint {
            url: "not a url".into(),
            message: "relative URL without a base".into(),
        };
        assert!(err.to_string().starts_with("invalid relay url \"not a url\""));
    }
}
