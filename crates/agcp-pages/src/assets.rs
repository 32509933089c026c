//! Stylesheet and script compiled into the binary.

/// URL of the stylesheet.
pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// URL of the script.
pub const SCRIPT_PATH: &str = "/assets/site.js";

/// Site stylesheet.
pub const SITE_CSS: &str = include_str!("../assets/site.css");

/// Scroll, menu and reveal behaviour.
pub const SITE_JS: &str = include_str!("../assets/site.js");

/// `Content-Type` for [`SITE_CSS`].
pub const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";

/// `Content-Type` for [`SITE_JS`].
pub const JS_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";

/// An embedded asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Asset {
    /// Response body.
    pub body: &'static str,
    /// Response content type.
    pub content_type: &'static str,
}

/// Look up an embedded asset by request path.
pub fn lookup(path: &str) -> Option<Asset> {
    match path {
        STYLESHEET_PATH => Some(Asset { body: SITE_CSS, content_type: CSS_CONTENT_TYPE }),
        SCRIPT_PATH => Some(Asset { body: SITE_JS, content_type: JS_CONTENT_TYPE }),
        _ => None,
    }
}
