//! Validation data, quality systems and regulatory capabilities.

use crate::types::{ListCard, Spec, Stat, Step};

/// Headline stability results. `value` is the emphasised figure.
pub const STABILITY_RESULTS: [Stat; 3] = [
    Stat {
        value: "18+ Months",
        label: "Nanoemulsion Stability",
        description: "Validated stability for nanoemulsion compositions under standard pharmaceutical storage conditions. Particle size, zeta potential, and active ingredient concentration maintained within specification throughout the testing period.",
    },
    Stat {
        value: "4+ Years",
        label: "CBD Formulation Stability",
        description: "Our CBD nanoemulsion formulations have demonstrated exceptional long-term stability exceeding four years, proving the robustness of our nanoemulsion platform for commercial pharmaceutical applications.",
    },
    Stat {
        value: "<10nm Consistent",
        label: "Nano-Suspension Particles",
        description: "Reproducible particle size below 10nm across production batches, validated through dynamic light scattering (DLS) and confirmed by electron microscopy.",
    },
];

/// Stability testing timeline; markers are months.
pub const STABILITY_TIMELINE: [Step; 5] = [
    Step {
        marker: "0",
        title: "Initial Formulation",
        description: "Baseline characterization and specification setting",
    },
    Step {
        marker: "3",
        title: "3-Month Check",
        description: "Accelerated stability conditions validated",
    },
    Step {
        marker: "6",
        title: "6-Month Review",
        description: "All parameters within specification",
    },
    Step {
        marker: "12",
        title: "12-Month Milestone",
        description: "Long-term stability confirmed",
    },
    Step {
        marker: "18+",
        title: "18+ Month Validation",
        description: "Commercial stability demonstrated",
    },
];

/// EU GMP and quality system cards.
pub const QUALITY_SYSTEMS: [ListCard; 6] = [
    ListCard {
        title: "EU GMP Certification",
        description: "Our production facility in Portugal holds European GMP certification, the gold standard for pharmaceutical manufacturing quality assurance.",
        items: &[
            "Certified production facility",
            "Regular compliance audits",
            "Full traceability systems",
            "Validated clean room operations",
        ],
    },
    ListCard {
        title: "Quality Control Processes",
        description: "Multi-stage quality control throughout the manufacturing process ensures every batch meets pharmaceutical specifications.",
        items: &[
            "Raw material verification",
            "In-process quality checks",
            "Final product testing",
            "Batch release documentation",
        ],
    },
    ListCard {
        title: "Analytical Methods",
        description: "State-of-the-art analytical equipment and validated methods for comprehensive characterization of nanoemulsions and nanoparticles.",
        items: &[
            "Dynamic light scattering (DLS)",
            "Zeta potential analysis",
            "HPLC active content assay",
            "Electron microscopy validation",
        ],
    },
    ListCard {
        title: "Stability Testing",
        description: "ICH-compliant stability testing programs providing robust data packages to support regulatory submissions globally.",
        items: &[
            "ICH Q1A(R2) compliant",
            "Accelerated & long-term studies",
            "Photostability testing",
            "In-use stability assessment",
        ],
    },
    ListCard {
        title: "Documentation Standards",
        description: "Comprehensive documentation systems meeting regulatory requirements across multiple jurisdictions for seamless technology transfer.",
        items: &[
            "Batch manufacturing records",
            "Standard operating procedures",
            "Validation protocols & reports",
            "Regulatory submission packages",
        ],
    },
    ListCard {
        title: "Continuous Improvement",
        description: "Systematic process optimization and quality improvement programs maintaining our position at the forefront of nano-pharmaceutical manufacturing.",
        items: &[
            "Process optimization studies",
            "Root cause analysis systems",
            "CAPA implementation",
            "Technology advancement program",
        ],
    },
];

/// Regulatory expertise bullets.
pub const REGULATORY_EXPERTISE: [&str; 5] = [
    "EU pharmaceutical regulatory framework expertise",
    "FDA submission strategy consultation",
    "Nano-specific regulatory guidance and documentation",
    "Global market access pathway planning",
    "Post-marketing compliance support",
];

/// Regulatory capability tiles. `value` is the short mark, `label` the caption.
pub const REGULATORY_CAPABILITIES: [Spec; 4] = [
    Spec { label: "GMP Certified", value: "EU" },
    Spec { label: "Compliant Studies", value: "ICH" },
    Spec { label: "Strategy Support", value: "FDA" },
    Spec { label: "Market Access", value: "Global" },
];
