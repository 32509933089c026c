//! Form relay settings.

use serde::{Deserialize, Serialize};

/// Where contact submissions are delivered.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSettings {
    /// Relay origin. Submissions are POSTed to its root path, so this must
    /// be a separate form-handling host, never the site itself. No default.
    pub relay_url: String,
    /// Request timeout. `None` leaves the transport default in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            relay_url: String::new(),
            timeout_ms: None,
        }
    }
}
