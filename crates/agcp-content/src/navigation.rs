//! Header navigation and footer link groups.

use crate::types::Link;

/// Primary navigation, in display order.
pub const NAV_LINKS: [Link; 7] = [
    Link { href: "/", label: "Home" },
    Link { href: "/technology-platforms", label: "Technology" },
    Link { href: "/applications", label: "Applications" },
    Link { href: "/science-validation", label: "Science & Validation" },
    Link { href: "/partnership", label: "Partnership" },
    Link { href: "/about", label: "About" },
    Link { href: "/contact", label: "Contact" },
];

/// Call-to-action button beside the navigation links.
pub const NAV_CTA: Link = Link {
    href: "/contact",
    label: "Partner With Us",
};

/// A titled column of footer links.
#[derive(Clone, Copy, Debug)]
pub struct LinkGroup {
    /// Column heading.
    pub title: &'static str,
    /// Links in display order.
    pub links: &'static [Link],
}

/// Footer link columns.
pub const FOOTER_GROUPS: [LinkGroup; 3] = [
    LinkGroup {
        title: "Technology Platforms",
        links: &[
            Link { href: "/technology-platforms#graphene", label: "Scalable Graphene Production" },
            Link { href: "/technology-platforms#transdermal", label: "Transdermal Nanoparticle Delivery" },
            Link { href: "/technology-platforms#bbb", label: "BBB Nanoemulsion Technology" },
        ],
    },
    LinkGroup {
        title: "Applications",
        links: &[
            Link { href: "/applications#nano-berberine", label: "Nano-Berberine Platform" },
            Link { href: "/applications#pain-wound", label: "Pain & Wound Care" },
            Link { href: "/applications#custom", label: "Custom Development" },
        ],
    },
    LinkGroup {
        title: "Company",
        links: &[
            Link { href: "/about", label: "About AGCP" },
            Link { href: "/about#leadership", label: "Leadership Team" },
            Link { href: "/science-validation", label: "Science & Validation" },
            Link { href: "/partnership", label: "Partnership Model" },
            Link { href: "/contact", label: "Contact Us" },
        ],
    },
];

/// Footer blurb under the logo.
pub const FOOTER_BLURB: &str = "Enabling pharmaceutical innovation through proprietary nanotechnology delivery platforms. EU GMP certified B2B technology licensing.";

/// Right-hand line of the footer's bottom bar.
pub const FOOTER_TAGLINE: &str =
    "Caldas da Rainha, Portugal · EU GMP Certified Pharmaceutical Manufacturing";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn nav_hrefs_are_unique() {
        let hrefs: HashSet<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs.len(), NAV_LINKS.len());
    }

    #[test]
    fn footer_links_point_at_nav_pages() {
        let pages: HashSet<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        for group in &FOOTER_GROUPS {
            for link in group.links {
                let path = link.href.split('#').next().unwrap_or_default();
                assert!(pages.contains(path), "{} is not a nav page", link.href);
            }
        }
    }

    #[test]
    fn cta_goes_to_contact() {
        assert_eq!(NAV_CTA.href, "/contact");
    }
}
