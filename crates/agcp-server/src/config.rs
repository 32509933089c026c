//! Server configuration.

use std::path::PathBuf;

use agcp_settings::SiteSettings;
use serde::{Deserialize, Serialize};

/// Configuration for the site server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (default `0` for auto-assign).
    pub port: u16,
    /// Directory served for paths no route claims.
    pub public_dir: PathBuf,
    /// Maximum accepted request body in bytes.
    pub max_body_bytes: usize,
    /// Public origin used for canonical links and structured data.
    pub base_url: String,
    /// Seconds in-flight requests get to finish once shutdown starts.
    pub drain_timeout_secs: u64,
}

/// Default for [`ServerConfig::drain_timeout_secs`].
pub const DEFAULT_DRAIN_TIMEOUT_SECS: u64 = 10;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            public_dir: PathBuf::from("public"),
            max_body_bytes: 64 * 1024,
            base_url: "https://agcp.pt".into(),
            drain_timeout_secs: DEFAULT_DRAIN_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Take the listener and origin settings from loaded settings.
    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self {
            host: settings.server.host.clone(),
            port: settings.server.port,
            public_dir: PathBuf::from(&settings.server.public_dir),
            max_body_bytes: settings.server.max_body_bytes,
            base_url: settings.site.base_url.clone(),
            drain_timeout_secs: DEFAULT_DRAIN_TIMEOUT_SECS,
        }
    }

    /// `host:port` as handed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
