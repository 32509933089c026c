//! The site's page table.

use agcp_content::meta::{self, PageMeta};

/// A renderable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// `/`
    Home,
    /// `/technology-platforms`
    Technology,
    /// `/applications`
    Applications,
    /// `/science-validation`
    Science,
    /// `/partnership`
    Partnership,
    /// `/about`
    About,
    /// `/contact`
    Contact,
    /// Anything unmatched.
    NotFound,
}

impl Page {
    /// Pages reachable by path, in navigation order.
    pub const ROUTED: [Self; 7] = [
        Self::Home,
        Self::Technology,
        Self::Applications,
        Self::Science,
        Self::Partnership,
        Self::About,
        Self::Contact,
    ];

    /// Request path. The 404 page has none of its own and reports `/404`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Technology => "/technology-platforms",
            Self::Applications => "/applications",
            Self::Science => "/science-validation",
            Self::Partnership => "/partnership",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::NotFound => "/404",
        }
    }

    /// Resolve a request path. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ROUTED
            .into_iter()
            .find(|p| p.path() == trimmed)
            .unwrap_or(Self::NotFound)
    }

    /// Stable short name for logs and metric labels.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Technology => "technology",
            Self::Applications => "applications",
            Self::Science => "science",
            Self::Partnership => "partnership",
            Self::About => "about",
            Self::Contact => "contact",
            Self::NotFound => "not_found",
        }
    }

    /// Document metadata.
    pub fn meta(self) -> &'static PageMeta {
        match self {
            Self::Home => &meta::HOME,
            Self::Technology => &meta::TECHNOLOGY,
            Self::Applications => &meta::APPLICATIONS,
            Self::Science => &meta::SCIENCE,
            Self::Partnership => &meta::PARTNERSHIP,
            Self::About => &meta::ABOUT,
            Self::Contact => &meta::CONTACT,
            Self::NotFound => &meta::NOT_FOUND,
        }
    }
}
