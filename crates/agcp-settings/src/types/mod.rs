//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with production values. `#[serde(default)]` lets a settings
//! file name only the keys it changes.

mod contact;
mod server;

pub use contact::*;
pub use server::*;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Root settings type for the site server.
///
/// ```json
/// {
///   "server": { "port": 8080, "publicDir": "/srv/agcp/public" },
///   "contact": { "relayUrl": "https://forms.example.net" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Public origin of the site.
    pub site: OriginSettings,
    /// Form relay settings.
    pub contact: ContactSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "agcp-site".to_string(),
            server: ServerSettings::default(),
            site: OriginSettings::default(),
            contact: ContactSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl SiteSettings {
    /// Reject values that would leave the server unable to start or the
    /// contact form unable to reach its relay.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(SettingsError::InvalidValue(
                "server.port must be non-zero".into(),
            ));
        }
        if self.server.max_body_bytes < MIN_BODY_BYTES {
            return Err(SettingsError::InvalidValue(format!(
                "server.maxBodyBytes must be at least {MIN_BODY_BYTES}"
            )));
        }
        check_http_url("site.baseUrl", &self.site.base_url)?;
        if self.contact.relay_url.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "contact.relayUrl is required".into(),
            ));
        }
        check_http_url("contact.relayUrl", &self.contact.relay_url)?;
        // the site itself never accepts POST /
        if origin(&self.contact.relay_url) == origin(&self.site.base_url) {
            return Err(SettingsError::InvalidValue(format!(
                "contact.relayUrl must be a separate host from site.baseUrl ({})",
                self.site.base_url
            )));
        }
        if self.contact.timeout_ms == Some(0) {
            return Err(SettingsError::InvalidValue(
                "contact.timeoutMs must be positive when set".into(),
            ));
        }
        Ok(())
    }
}

/// Public origin used for canonical links and structured data.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginSettings {
    /// Absolute base URL without a trailing slash.
    pub base_url: String,
}

impl Default for OriginSettings {
    fn default() -> Self {
        Self {
            base_url: "https://agcp.pt".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Output format: `compact` or `json`.
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

fn check_http_url(key: &str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(SettingsError::InvalidValue(format!(
            "{key} must be an http(s) URL, got {value:?}"
        )))
    }
}

/// `scheme://host[:port]`, lowercased.
fn origin(url: &str) -> String {
    let url = url.trim().to_ascii_lowercase();
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
            format!("{scheme}://{authority}")
        }
        None => url,
    }
}
