//! HTTP listener settings.

use serde::{Deserialize, Serialize};

/// Smallest accepted request body limit. A full contact form with a long
/// message fits comfortably.
pub const MIN_BODY_BYTES: usize = 1024;

/// HTTP listener settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Directory served for paths no route claims (images, favicon).
    pub public_dir: String,
    /// Maximum accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: "public".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}
