//! Document metadata: site-wide defaults and per-page titles.

/// Title used when a page sets none.
pub const DEFAULT_TITLE: &str = "AGCP Farmaceuticos - Pharmaceutical Nanotechnology Platform";

/// Template applied to page titles; `%s` is replaced by the page title.
pub const TITLE_TEMPLATE: &str = "%s | AGCP Farmaceuticos - Pharmaceutical Nanotechnology";

/// Site-wide description.
pub const DEFAULT_DESCRIPTION: &str = "AGCP Farmaceuticos provides proprietary nanotechnology drug delivery platforms for pharmaceutical licensing. EU GMP certified B2B technology partner.";

/// Site-wide keywords.
pub const KEYWORDS: [&str; 7] = [
    "pharmaceutical nanotechnology platform",
    "drug delivery technology licensing",
    "nano-emulsion pharmaceutical",
    "transdermal drug delivery",
    "graphene pharmaceutical applications",
    "blood-brain barrier delivery",
    "B2B pharmaceutical technology platform",
];

/// Open Graph site name.
pub const OG_SITE_NAME: &str = "AGCP Farmaceuticos";

/// Open Graph locale.
pub const OG_LOCALE: &str = "en_US";

/// Default Open Graph description.
pub const OG_DESCRIPTION: &str = "Proprietary nanotechnology drug delivery platforms for pharmaceutical licensing. EU GMP certified.";

/// Twitter card type.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Default Twitter description.
pub const TWITTER_DESCRIPTION: &str =
    "Proprietary nanotechnology drug delivery platforms for pharmaceutical licensing.";

/// Robots directive.
pub const ROBOTS: &str = "index, follow";

/// Metadata for one page.
#[derive(Clone, Copy, Debug)]
pub struct PageMeta {
    /// Page title run through [`TITLE_TEMPLATE`]; `None` uses [`DEFAULT_TITLE`].
    pub title: Option<&'static str>,
    /// Meta description.
    pub description: &'static str,
    /// Open Graph title.
    pub og_title: &'static str,
    /// Open Graph description.
    pub og_description: &'static str,
    /// Second breadcrumb entry; `None` for pages outside the breadcrumb trail.
    pub breadcrumb: Option<&'static str>,
}

impl PageMeta {
    /// The full `<title>` text.
    pub fn document_title(&self) -> String {
        self.title.map_or_else(
            || DEFAULT_TITLE.to_string(),
            |t| TITLE_TEMPLATE.replace("%s", t),
        )
    }
}

/// Landing page.
pub const HOME: PageMeta = PageMeta {
    title: None,
    description: DEFAULT_DESCRIPTION,
    og_title: DEFAULT_TITLE,
    og_description: OG_DESCRIPTION,
    breadcrumb: None,
};

/// Technology platforms page.
pub const TECHNOLOGY: PageMeta = PageMeta {
    title: Some("Technology Platforms"),
    description: "Explore AGCP's three proprietary nanotechnology platforms: scalable graphene production, transdermal nanoparticle delivery, and BBB nanoemulsion technology.",
    og_title: "Technology Platforms | AGCP Farmaceuticos",
    og_description: "Three proprietary nanotechnology platforms for pharmaceutical drug delivery licensing.",
    breadcrumb: Some("Technology Platforms"),
};

/// Applications page.
pub const APPLICATIONS: PageMeta = PageMeta {
    title: Some("Applications"),
    description: "Validated pharmaceutical applications of AGCP nanotechnology: nano-berberine for metabolic disease, pain & wound care, and custom drug delivery development.",
    og_title: "Applications | AGCP Farmaceuticos",
    og_description: "Validated pharmaceutical nanotechnology applications for licensing partners.",
    breadcrumb: Some("Applications"),
};

/// Science & validation page.
pub const SCIENCE: PageMeta = PageMeta {
    title: Some("Science & Validation"),
    description: "Scientific validation data for AGCP nanotechnology platforms: 18+ months stability, EU GMP certification, quality control processes, and regulatory expertise.",
    og_title: "Science & Validation | AGCP Farmaceuticos",
    og_description: "Rigorous scientific validation backing our pharmaceutical nanotechnology platforms.",
    breadcrumb: Some("Science & Validation"),
};

/// Partnership page.
pub const PARTNERSHIP: PageMeta = PageMeta {
    title: Some("Partnership Model"),
    description: "License AGCP's nanotechnology platforms for your pharmaceutical products. B2B technology licensing with full regulatory support and manufacturing guidance.",
    og_title: "Partnership Model | AGCP Farmaceuticos",
    og_description: "B2B pharmaceutical nanotechnology licensing and partnership opportunities.",
    breadcrumb: Some("Partnership Model"),
};

/// About page.
pub const ABOUT: PageMeta = PageMeta {
    title: Some("About"),
    description: "AGCP Farmaceuticos: pharmaceutical nanotechnology company in Portugal. Led by Lawrence Fine (CEO) and Dr. Alexander Dementev (CTO).",
    og_title: "About | AGCP Farmaceuticos",
    og_description: "Leadership, mission, and facilities of AGCP Farmaceuticos pharmaceutical nanotechnology.",
    breadcrumb: Some("About"),
};

/// Contact page.
pub const CONTACT: PageMeta = PageMeta {
    title: Some("Contact"),
    description: "Contact AGCP Farmaceuticos for pharmaceutical nanotechnology licensing, partnership, and investment inquiries. Based in Caldas da Rainha, Portugal.",
    og_title: "Contact | AGCP Farmaceuticos",
    og_description: "Partnership and investment inquiries for pharmaceutical nanotechnology licensing.",
    breadcrumb: Some("Contact"),
};

/// 404 page.
pub const NOT_FOUND: PageMeta = PageMeta {
    title: Some("Page Not Found"),
    description: DEFAULT_DESCRIPTION,
    og_title: DEFAULT_TITLE,
    og_description: OG_DESCRIPTION,
    breadcrumb: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_uses_default_title() {
        assert_eq!(
            HOME.document_title(),
            "AGCP Farmaceuticos - Pharmaceutical Nanotechnology Platform"
        );
    }

    #[test]
    fn page_title_uses_template() {
        assert_eq!(
            ABOUT.document_title(),
            "About | AGCP Farmaceuticos - Pharmaceutical Nanotechnology"
        );
        assert_eq!(
            SCIENCE.document_title(),
            "Science & Validation | AGCP Farmaceuticos - Pharmaceutical Nanotechnology"
        );
    }

    #[test]
    fn only_home_and_404_skip_breadcrumbs() {
        let with: Vec<_> = [TECHNOLOGY, APPLICATIONS, SCIENCE, PARTNERSHIP, ABOUT, CONTACT]
            .iter()
            .filter_map(|m| m.breadcrumb)
            .collect();
        assert_eq!(with.len(), 6);
        assert!(HOME.breadcrumb.is_none());
        assert!(NOT_FOUND.breadcrumb.is_none());
    }
}
