//! Company story, leadership and facilities.

use crate::types::Stat;

/// A milestone on the company timeline.
#[derive(Clone, Copy, Debug)]
pub struct Milestone {
    /// Era label ("Foundation", "R&D", "Current").
    pub era: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Detail line.
    pub description: &'static str,
}

impl Milestone {
    /// Up to three leading characters of the era, for the round badge.
    pub fn badge(&self) -> &'static str {
        let end = self
            .era
            .char_indices()
            .nth(3)
            .map_or(self.era.len(), |(i, _)| i);
        &self.era[..end]
    }
}

/// Company milestones, oldest first.
pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        era: "Foundation",
        title: "Company Established",
        description: "AGCP Farmaceuticos founded in Caldas da Rainha, Portugal with focus on pharmaceutical nanotechnology.",
    },
    Milestone {
        era: "R&D",
        title: "Platform Development",
        description: "Development and validation of three core nanotechnology platforms for pharmaceutical drug delivery.",
    },
    Milestone {
        era: "Validation",
        title: "Stability Demonstrated",
        description: "18+ months stability data validated for nanoemulsion platforms; 4+ years for CBD formulations.",
    },
    Milestone {
        era: "Quality",
        title: "Quality Standards Established",
        description: "Implemented rigorous pharmaceutical quality systems for nanotechnology production.",
    },
    Milestone {
        era: "Current",
        title: "Commercial Partnerships",
        description: "Actively pursuing pharmaceutical licensing partnerships and strategic investment for platform expansion.",
    },
];

/// Company-at-a-glance tiles beside the mission statement.
pub const COMPANY_STATS: [Stat; 4] = [
    Stat { value: "3", label: "Proprietary Platforms", description: "Validated nanotechnology" },
    Stat { value: "PT", label: "Portugal, EU", description: "Manufacturing base" },
    Stat { value: "B2B", label: "Platform Model", description: "Technology licensing" },
    Stat { value: "47+", label: "Years Combined", description: "Leadership experience" },
];

/// A leadership profile card.
#[derive(Clone, Copy, Debug)]
pub struct Leader {
    /// Full name, also the portrait alt text.
    pub name: &'static str,
    /// Role.
    pub title: &'static str,
    /// Portrait path under the public directory.
    pub portrait: &'static str,
    /// Biography paragraph.
    pub bio: &'static str,
    /// Credential bullets.
    pub credentials: &'static [&'static str],
}

/// Leadership team in display order.
pub const LEADERS: [Leader; 2] = [
    Leader {
        name: "Lawrence Fine",
        title: "CEO & Chairman",
        portrait: "/30.jpeg",
        bio: "A seasoned technology executive and business strategist with 17 years at Microsoft, Lawrence brings extensive experience in M&A, commercialization, and building high-growth ventures from concept to exit.",
        credentials: &[
            "PhD in Engineering, Stanford University",
            "MBA, Emory University Goizueta Business School",
            "17-year career at Microsoft Corporation",
            "Extensive M&A and commercialization expertise",
            "Biotech board experience leading Phase II clinical trials",
            "Track record of successful biotech exits",
        ],
    },
    Leader {
        name: "Dr. Alexander Dementev",
        title: "President & CTO",
        portrait: "/Alex3-1-1-edited-200x300.png",
        bio: "A distinguished pharmaceutical scientist with over 30 years of research experience, Dr. Dementev is a pioneer in nano-suspension technology and the driving force behind AGCP's proprietary nanotechnology platforms.",
        credentials: &[
            "PhD in Analytical Chemistry",
            "Master's in Applied Physics",
            "30+ years pharmaceutical research experience",
            "Pioneer in nano-suspensions achieving <10nm particles",
            "Developer of proprietary nanoemulsion methodologies",
            "Expert in pharmaceutical formulation and drug delivery",
        ],
    },
];

/// Facility capabilities.
pub const FACILITIES: [&str; 5] = [
    "Pharmaceutical-grade nanotechnology production",
    "Dedicated nanotechnology formulation laboratories",
    "Quality control and analytical testing facilities",
    "Stability testing chambers (ICH compliant)",
    "Scalable production from development through commercial volumes",
];

/// Chips under the facility address.
pub const FACILITY_BADGES: [&str; 2] = ["Pharmaceutical Grade", "Portugal, EU"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::FOUNDERS;

    #[test]
    fn milestone_badges_truncate_to_three_chars() {
        let badges: Vec<_> = MILESTONES.iter().map(Milestone::badge).collect();
        assert_eq!(badges, ["Fou", "R&D", "Val", "Qua", "Cur"]);
    }

    #[test]
    fn short_era_badge_is_whole_era() {
        let m = Milestone { era: "Q1", title: "", description: "" };
        assert_eq!(m.badge(), "Q1");
    }

    #[test]
    fn leaders_match_founders() {
        for (leader, founder) in LEADERS.iter().zip(&FOUNDERS) {
            assert_eq!(leader.name, founder.name);
            assert_eq!(leader.title, founder.job_title);
        }
    }

    #[test]
    fn portraits_are_root_relative() {
        assert!(LEADERS.iter().all(|l| l.portrait.starts_with('/')));
    }
}
