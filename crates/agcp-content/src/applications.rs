//! Application portfolio: berberine, pain & wound care, custom development.

use crate::types::ListCard;

/// Metabolic disease applications of nano-berberine.
pub const BERBERINE_APPLICATIONS: [&str; 4] = [
    "Enhanced bioavailability for metabolic syndrome management",
    "Improved glycemic control through superior absorption",
    "Lipid metabolism support with optimized delivery",
    "Anti-inflammatory properties delivered at therapeutic levels",
];

/// A platform advantage with its qualitative improvement.
#[derive(Clone, Copy, Debug)]
pub struct Advantage {
    /// What improves.
    pub metric: &'static str,
    /// How much.
    pub improvement: &'static str,
    /// Supporting detail.
    pub detail: &'static str,
}

impl Advantage {
    /// Heading in the form `metric: improvement`.
    pub fn heading(&self) -> String {
        format!("{}: {}", self.metric, self.improvement)
    }
}

/// Nano-berberine platform advantages.
pub const BERBERINE_ADVANTAGES: [Advantage; 4] = [
    Advantage {
        metric: "Bioavailability",
        improvement: "Significantly Enhanced",
        detail: "Nano-formulation overcomes poor oral absorption",
    },
    Advantage {
        metric: "Dosing",
        improvement: "Optimized",
        detail: "Lower doses achieve therapeutic concentrations",
    },
    Advantage {
        metric: "Stability",
        improvement: "Validated",
        detail: "Pharmaceutical-grade formulation stability",
    },
    Advantage {
        metric: "Manufacturing",
        improvement: "Scalable",
        detail: "Pharmaceutical-grade production capability",
    },
];

/// Pain & wound care absorption benefits.
pub const PAIN_WOUND_BENEFITS: [&str; 5] = [
    "Transdermal delivery of natural analgesic compounds",
    "Enhanced penetration for accelerated wound healing",
    "Controlled release profiles for sustained therapeutic effect",
    "Natural formulation approach meeting market demand",
    "Ready for licensing partnership and commercial development",
];

/// Progress of a pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageStatus {
    /// Finished.
    Completed,
    /// Prepared, not started.
    Ready,
    /// Open to partners.
    Available,
}

impl StageStatus {
    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Ready => "Ready",
            Self::Available => "Available",
        }
    }

    /// Lowercase token for CSS modifiers.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Ready => "ready",
            Self::Available => "available",
        }
    }
}

/// One stage of the product development pipeline.
#[derive(Clone, Copy, Debug)]
pub struct PipelineStage {
    /// Stage name.
    pub phase: &'static str,
    /// Current status.
    pub status: StageStatus,
    /// What the stage covered.
    pub description: &'static str,
}

/// Pain & wound care development pipeline.
pub const PAIN_WOUND_PIPELINE: [PipelineStage; 4] = [
    PipelineStage {
        phase: "Formulation",
        status: StageStatus::Completed,
        description: "Nano-enhanced natural compound formulations developed",
    },
    PipelineStage {
        phase: "Validation",
        status: StageStatus::Completed,
        description: "Efficacy and stability testing validated",
    },
    PipelineStage {
        phase: "Manufacturing",
        status: StageStatus::Ready,
        description: "Production protocols established",
    },
    PipelineStage {
        phase: "Licensing",
        status: StageStatus::Available,
        description: "Ready for pharmaceutical partner licensing",
    },
];

/// Custom development service cards.
pub const CUSTOM_SERVICES: [ListCard; 3] = [
    ListCard {
        title: "Formulation Development",
        description: "Our team works with your active pharmaceutical ingredients to develop optimized nano-formulations tailored to your therapeutic targets and delivery requirements.",
        items: &[
            "API compatibility assessment",
            "Particle size optimization",
            "Stability testing protocols",
            "Formulation scale-up pathway",
        ],
    },
    ListCard {
        title: "Development Process",
        description: "A structured development pathway from initial feasibility through validated manufacturing, ensuring clear milestones and deliverables at each stage.",
        items: &[
            "Feasibility assessment",
            "Proof-of-concept development",
            "Optimization and validation",
            "Technology transfer support",
        ],
    },
    ListCard {
        title: "Regulatory Support",
        description: "Leverage our regulatory expertise to accelerate your path to market across global jurisdictions.",
        items: &[
            "Regulatory strategy guidance",
            "Documentation support",
            "Stability data packages",
            "Commercialization pathway planning",
        ],
    },
];
