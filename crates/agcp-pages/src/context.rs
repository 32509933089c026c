//! Per-render inputs that do not come from the content registry.

use chrono::{Datelike, Utc};

/// Values every page needs at render time.
#[derive(Clone, Debug)]
pub struct RenderContext {
    base_url: String,
    year: i32,
}

impl RenderContext {
    /// Context for the current calendar year.
    pub fn new(base_url: &str) -> Self {
        Self::with_year(base_url, Utc::now().year())
    }

    /// Context with a fixed copyright year.
    pub fn with_year(base_url: &str, year: i32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            year,
        }
    }

    /// Site origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Copyright year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Absolute URL for a root-relative path. `/` maps to the bare origin.
    pub fn absolute(&self, path: &str) -> String {
        if path == "/" {
            self.base_url.clone()
        } else {
            format!("{}{path}", self.base_url)
        }
    }
}
