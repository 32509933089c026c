//! Technology platform specs, bullets and comparison data.

use crate::types::{Bar, Spec, Step};

/// Graphene key figures.
pub const GRAPHENE_SPECS: [Spec; 4] = [
    Spec { label: "Cost Advantage", value: "Significant Reduction" },
    Spec { label: "Market Price", value: "$500-5,000/gram" },
    Spec { label: "Quality", value: "Monolayer Grade" },
    Spec { label: "Consistency", value: "Pharmaceutical-Grade" },
];

/// Graphene manufacturing advantages.
pub const GRAPHENE_ADVANTAGES: [&str; 5] = [
    "Proprietary monolayer graphene production methodology",
    "Significant cost reduction versus market rates of $500-5,000/gram",
    "Scalable manufacturing for pharmaceutical-volume production",
    "Consistent quality meeting pharmaceutical-grade specifications",
    "Applications spanning drug delivery, biosensors, and advanced materials",
];

/// Graphene cost comparison, cheapest first.
pub const GRAPHENE_COST_BARS: [Bar; 3] = [
    Bar { label: "AGCP Production", value: "Significant Reduction", percent: 5, highlight: true },
    Bar { label: "Market Low", value: "$500/gram", percent: 40, highlight: false },
    Bar { label: "Market High", value: "$5,000/gram", percent: 100, highlight: false },
];

/// Transdermal key figures.
pub const TRANSDERMAL_SPECS: [Spec; 4] = [
    Spec { label: "Delivery Method", value: "Topical Nanoparticle" },
    Spec { label: "Absorption", value: "Enhanced Penetration" },
    Spec { label: "Validation", value: "Pre-Clinical Data" },
    Spec { label: "Applications", value: "Multi-Therapeutic" },
];

/// Transdermal advantages.
pub const TRANSDERMAL_ADVANTAGES: [&str; 5] = [
    "Enhanced penetration through skin barrier for improved bioavailability",
    "Optimized particle size distribution for targeted tissue delivery",
    "Clinical validation for topical pharmaceutical applications",
    "Compatible with a wide range of active pharmaceutical ingredients",
    "Scalable manufacturing for pharmaceutical-grade production",
];

/// Transdermal delivery process.
pub const TRANSDERMAL_STEPS: [Step; 4] = [
    Step {
        marker: "01",
        title: "Nanoparticle Formulation",
        description: "Active ingredients encapsulated in optimized nanoparticles",
    },
    Step {
        marker: "02",
        title: "Skin Barrier Penetration",
        description: "Particles navigate intercellular pathways through the stratum corneum",
    },
    Step {
        marker: "03",
        title: "Targeted Release",
        description: "Controlled release at target tissue depth for sustained therapeutic effect",
    },
    Step {
        marker: "04",
        title: "Enhanced Absorption",
        description: "Superior bioavailability versus conventional topical formulations",
    },
];

/// Blood-brain barrier key figures.
pub const BBB_SPECS: [Spec; 4] = [
    Spec { label: "Particle Size", value: "<10nm" },
    Spec { label: "Formulation", value: "Oil-in-Water" },
    Spec { label: "Stability", value: "4+ Years (CBD)" },
    Spec { label: "Target", value: "CNS Delivery" },
];

/// Blood-brain barrier validation points.
pub const BBB_VALIDATION: [&str; 5] = [
    "Particle sizes consistently below 10nm in nano-suspension formulations",
    "4+ years of demonstrated stability with CBD formulations",
    "18+ months validated stability for nanoemulsion compositions",
    "Oil-in-water formulation for superior biocompatibility",
    "Enables CNS drug delivery for neurological therapeutic applications",
];

/// Nanoemulsion stability durations.
pub const BBB_STABILITY_BARS: [Bar; 2] = [
    Bar { label: "CBD Nanoemulsion", value: "4+ Years", percent: 100, highlight: true },
    Bar { label: "General Nanoemulsions", value: "18+ Months", percent: 75, highlight: true },
];
