//! Delivery of encoded inquiries to the hosted form relay.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::errors::RelayError;

/// Content type of every submission.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// What the relay answered. The body is never read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    /// HTTP status code.
    pub status: u16,
}

impl RelayResponse {
    /// Any 2xx.
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that accepts an encoded inquiry.
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// POST `body` as a form submission. `Err` means no response arrived.
    async fn deliver(&self, body: String) -> Result<RelayResponse, RelayError>;
}

/// [`FormRelay`] backed by `reqwest`, posting to the relay origin's `/`.
pub struct HttpFormRelay {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormRelay {
    /// Build a relay client for `relay_url`. Any path on the URL is
    /// dropped; submissions always go to the root. `timeout` of `None`
    /// keeps the transport default.
    pub fn new(relay_url: &str, timeout: Option<Duration>) -> Result<Self, RelayError> {
        let endpoint = relay_endpoint(relay_url)?;

        let mut builder =
            reqwest::Client::builder().user_agent(concat!("agcp-site/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::Client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Where submissions are sent.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn deliver(&self, body: String) -> Result<RelayResponse, RelayError> {
        debug!(endpoint = %self.endpoint, bytes = body.len(), "posting inquiry to relay");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        Ok(RelayResponse {
            status: response.status().as_u16(),
        })
    }
}

/// Root path of the relay origin.
pub fn relay_endpoint(relay_url: &str) -> Result<Url, RelayError> {
    let invalid = |message: String| RelayError::InvalidEndpoint {
        url: relay_url.to_string(),
        message,
    };
    let url = Url::parse(relay_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    url.join("/").map_err(|e| invalid(e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
