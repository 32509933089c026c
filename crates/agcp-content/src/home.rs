//! Landing page lists.

use crate::types::{Card, Stat};

/// Illustration drawn next to a platform summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformIcon {
    /// Hexagonal lattice.
    Graphene,
    /// Particles crossing a membrane.
    Transdermal,
    /// Concentric barrier rings.
    Barrier,
}

/// One platform card on the landing page.
#[derive(Clone, Copy, Debug)]
pub struct PlatformSummary {
    /// Platform name.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
    /// Deep link into the technology page.
    pub href: &'static str,
    /// Illustration.
    pub icon: PlatformIcon,
    /// Headline figure.
    pub stat: &'static str,
    /// Caption for the figure.
    pub stat_label: &'static str,
}

/// The three platforms, in display order.
pub const PLATFORMS: [PlatformSummary; 3] = [
    PlatformSummary {
        title: "Scalable Graphene Production",
        description: "Proprietary monolayer graphene manufacturing at a fraction of the market standard of $500-5,000/gram. Enabling advanced materials and drug delivery applications at pharmaceutical scale.",
        href: "/technology-platforms#graphene",
        icon: PlatformIcon::Graphene,
        stat: "Significant",
        stat_label: "Cost Reduction",
    },
    PlatformSummary {
        title: "Transdermal Nanoparticle Delivery",
        description: "Enhanced absorption through the skin barrier via particle optimization for targeted delivery. Clinically validated for topical pharmaceutical applications with superior bioavailability.",
        href: "/technology-platforms#transdermal",
        icon: PlatformIcon::Transdermal,
        stat: "Enhanced",
        stat_label: "Bioavailability",
    },
    PlatformSummary {
        title: "BBB Nanoemulsion Technology",
        description: "Oil-in-water nano-suspensions achieving particles <10nm, validated with 4+ years of stability data. Enables CNS drug delivery across the blood-brain barrier previously considered impossible.",
        href: "/technology-platforms#bbb",
        icon: PlatformIcon::Barrier,
        stat: "<10nm",
        stat_label: "Particle Size",
    },
];

/// Headline validation figures.
pub const TRUST_SIGNALS: [Stat; 3] = [
    Stat {
        value: "18+",
        label: "Months Stability Data",
        description: "Validated nanoemulsion formulation stability",
    },
    Stat {
        value: "<10nm",
        label: "Particle Achievement",
        description: "Nano-suspension particle size for BBB penetration",
    },
    Stat {
        value: "95%+",
        label: "Cost Reduction",
        description: "Graphene production cost versus market pricing",
    },
];

/// "Why AGCP" cards.
pub const VALUE_PROPS: [Card; 4] = [
    Card {
        title: "B2B Platform Model",
        description: "We enable your products. License our proprietary nanotechnology platforms to enhance your drug delivery systems without building from scratch.",
    },
    Card {
        title: "Regulatory Expertise",
        description: "Deep regulatory knowledge to navigate commercialization pathways across global markets.",
    },
    Card {
        title: "Proven Stability",
        description: "Extensive validation data including 18+ months nanoemulsion stability and 4+ years CBD formulation data demonstrating commercial viability.",
    },
    Card {
        title: "Cost-Effective Scale",
        description: "Proprietary manufacturing processes delivering pharmaceutical-grade output at a fraction of conventional costs, enabling competitive product development.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_links_use_technology_anchors() {
        let anchors: Vec<_> = PLATFORMS
            .iter()
            .filter_map(|p| p.href.strip_prefix("/technology-platforms#"))
            .collect();
        assert_eq!(anchors, ["graphene", "transdermal", "bbb"]);
    }
}
