//! Partnership process, offerings and structures.

use crate::types::ListCard;

/// A step of the partnership process with its typical duration.
#[derive(Clone, Copy, Debug)]
pub struct ProcessStep {
    /// Two-digit ordinal.
    pub number: &'static str,
    /// Step heading.
    pub title: &'static str,
    /// Detail paragraph.
    pub description: &'static str,
    /// Typical timing ("Week 1-2", "Ongoing").
    pub duration: &'static str,
}

/// Partnership process, consultation through ongoing support.
pub const PROCESS_STEPS: [ProcessStep; 6] = [
    ProcessStep {
        number: "01",
        title: "Initial Consultation",
        description: "We begin with a confidential discussion to understand your drug delivery challenges, therapeutic targets, and commercial objectives.",
        duration: "Week 1-2",
    },
    ProcessStep {
        number: "02",
        title: "Feasibility Assessment",
        description: "Our scientific team evaluates the compatibility of your active pharmaceutical ingredients with our nanotechnology platforms and develops a preliminary formulation strategy.",
        duration: "Week 3-6",
    },
    ProcessStep {
        number: "03",
        title: "Proof of Concept",
        description: "Development and testing of prototype formulations demonstrating the performance advantages of our nano-delivery technology with your specific compounds.",
        duration: "Month 2-4",
    },
    ProcessStep {
        number: "04",
        title: "Optimization & Validation",
        description: "Iterative optimization of the formulation followed by comprehensive validation including stability testing, analytical method development, and process characterization.",
        duration: "Month 4-8",
    },
    ProcessStep {
        number: "05",
        title: "Technology Transfer & Scale-Up",
        description: "Complete technology transfer package including manufacturing protocols, quality specifications, and regulatory documentation to support your commercial production.",
        duration: "Month 8-12",
    },
    ProcessStep {
        number: "06",
        title: "Ongoing Support",
        description: "Continued technical and regulatory support throughout your product lifecycle, including manufacturing optimization and market expansion assistance.",
        duration: "Ongoing",
    },
];

/// What a licensing package includes. Descriptions are empty.
pub const OFFERINGS: [ListCard; 3] = [
    ListCard {
        title: "Technology Transfer",
        description: "",
        items: &[
            "Complete formulation methodology documentation",
            "Manufacturing process protocols and parameters",
            "Analytical methods and specifications",
            "Scale-up guidance for commercial production",
        ],
    },
    ListCard {
        title: "Regulatory Support",
        description: "",
        items: &[
            "Regulatory strategy development",
            "Stability data packages (ICH compliant)",
            "Regulatory documentation and compliance guidance",
            "Submission support for target markets",
        ],
    },
    ListCard {
        title: "Manufacturing Guidance",
        description: "",
        items: &[
            "Pharmaceutical-grade production capability",
            "Process validation protocols",
            "Quality control specifications",
            "Supply chain optimization",
        ],
    },
];

/// Partnership structures; `items` render as feature chips.
pub const PARTNERSHIP_TYPES: [ListCard; 4] = [
    ListCard {
        title: "Technology Licensing",
        description: "License our proprietary nanotechnology platforms for integration into your pharmaceutical products. Includes complete technology transfer, manufacturing protocols, and regulatory support packages.",
        items: &[
            "Platform access",
            "Technology transfer",
            "Regulatory documentation",
            "Manufacturing protocols",
        ],
    },
    ListCard {
        title: "Co-Development",
        description: "Collaborative development partnerships where AGCP works alongside your R&D team to develop custom nano-formulations optimized for your specific therapeutic targets.",
        items: &[
            "Joint development",
            "Shared milestones",
            "Combined expertise",
            "Customized solutions",
        ],
    },
    ListCard {
        title: "Contract Manufacturing",
        description: "Utilize our production facility for the manufacture of nano-pharmaceutical products developed using our platform technologies.",
        items: &[
            "Pharmaceutical-grade production",
            "Quality assurance",
            "Batch documentation",
            "Supply reliability",
        ],
    },
    ListCard {
        title: "Strategic Investment",
        description: "Investment opportunities for venture capital and strategic investors seeking exposure to pharmaceutical nanotechnology with validated platforms and clear commercialization pathways.",
        items: &[
            "Technology portfolio",
            "Market opportunity",
            "IP position",
            "Growth trajectory",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_sequential() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn last_step_is_open_ended() {
        assert_eq!(PROCESS_STEPS[5].duration, "Ongoing");
    }
}
