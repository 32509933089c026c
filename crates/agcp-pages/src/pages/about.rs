//! About page: mission, leadership, milestones and facilities.

use agcp_content::about::{
    COMPANY_STATS, FACILITIES, FACILITY_BADGES, LEADERS, Leader, MILESTONES,
};
use agcp_content::{ADDRESS_LINES, COMPANY, Link};
use maud::{Markup, html};

use crate::components::{check_list, cta_band, page_hero, section_header};
use crate::icons;
use crate::reveal::{reveal, reveal_with, stagger};

/// Render the about page body.
pub fn render() -> Markup {
    html! {
        (page_hero(
            "About AGCP",
            "Enabling Pharmaceutical Innovation Through Proprietary Nanotechnology",
            "AGCP Farmaceuticos is a Portuguese pharmaceutical nanotechnology company providing proprietary drug delivery platforms to the global pharmaceutical industry through B2B technology licensing.",
        ))

        section.section id="mission" {
            div.container.split {
                (reveal(0.0, &html! {
                    h2.section-title { "Our Mission" }
                    p.mission-quote {
                        "“Enabling pharmaceutical innovation through proprietary nanotechnology platforms.”"
                    }
                    p.section-intro {
                        "We believe that breakthroughs in drug delivery should be accessible to pharmaceutical companies of all sizes. Our B2B platform model removes the barrier of developing nanotechnology in-house, allowing our partners to focus on their therapeutic expertise while we provide the delivery technology."
                    }
                    p.section-intro {
                        "Operating from our facility in Portugal, we combine pharmaceutical manufacturing with cutting-edge nanotechnology research to deliver commercially viable solutions for our partners."
                    }
                }))
                (reveal(0.2, &html! {
                    div.spec-grid {
                        @for stat in &COMPANY_STATS {
                            div.spec-tile.centered {
                                p.metric-value { (stat.value) }
                                p.metric-label { (stat.label) }
                                p.metric-detail { (stat.description) }
                            }
                        }
                    }
                }))
            }
        }

        section.section.section-surface id="leadership" {
            div.container {
                (reveal_with("centered section-head", 0.0, &section_header(
                    None,
                    "Leadership Team",
                    Some("Experienced leaders combining deep pharmaceutical science expertise with proven business commercialization and M&A track records."),
                )))
                div.grid-2 {
                    @for (i, leader) in LEADERS.iter().enumerate() {
                        (reveal(stagger(i, 0.15), &leader_card(leader)))
                    }
                }
            }
        }

        section.section id="milestones" {
            div.container.narrow {
                (reveal_with("centered section-head", 0.0, &section_header(None, "Company Milestones", None)))
                ol.timeline {
                    @for (i, milestone) in MILESTONES.iter().enumerate() {
                        li.timeline-item {
                            (reveal(stagger(i, 0.1), &html! {
                                span.timeline-badge { (milestone.badge()) }
                                div {
                                    p.timeline-meta { (milestone.era) }
                                    h3 { (milestone.title) }
                                    p.step-detail { (milestone.description) }
                                }
                            }))
                        }
                    }
                }
            }
        }

        section.section.section-surface id="facilities" {
            div.container.split {
                (reveal(0.0, &html! {
                    (section_header(
                        None,
                        "Our Facilities",
                        Some("Based in Caldas da Rainha, Portugal, our manufacturing facility provides the foundation for pharmaceutical-grade nanotechnology production."),
                    ))
                    div.block { (check_list(&FACILITIES)) }
                }))
                (reveal(0.2, &html! {
                    div.card {
                        div.contact-item {
                            (icons::PIN)
                            div {
                                p.step-title { (COMPANY.legal_name) }
                                p.step-detail { (COMPANY.locality) ", " (COMPANY.country) }
                            }
                        }
                        address.panel.block {
                            @for (i, line) in ADDRESS_LINES.iter().enumerate() {
                                @if i > 0 { br; }
                                (line)
                            }
                        }
                        div.chip-row {
                            @for badge in &FACILITY_BADGES {
                                span.chip { (badge) }
                            }
                        }
                    }
                }))
            }
        }

        (cta_band(
            "Join Our Mission",
            "Partner with AGCP to bring next-generation nanotechnology drug delivery to the pharmaceutical market. We welcome partnership and investment inquiries.",
            Link { href: "/contact", label: "Get In Touch" },
            Some(Link { href: "/partnership", label: "Partnership Model" }),
        ))
    }
}

fn leader_card(leader: &Leader) -> Markup {
    html! {
        article.card.leader-card {
            div.leader-head {
                img.portrait src=(leader.portrait) alt=(leader.name) width="128" height="128" loading="lazy";
                h3 { (leader.name) }
                p.leader-role { (leader.title) }
            }
            p { (leader.bio) }
            div.block {
                h4.spec-label { "Credentials" }
                (check_list(leader.credentials))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leadership_anchor_and_portraits() {
        let out = render().into_string();
        assert!(out.contains(r#"id="leadership""#));
        assert!(out.contains(r#"src="/30.jpeg" alt="Lawrence Fine""#));
        assert!(out.contains(r#"src="/Alex3-1-1-edited-200x300.png" alt="Dr. Alexander Dementev""#));
    }

    #[test]
    fn milestone_badges_truncate_era() {
        let out = render().into_string();
        assert!(out.contains(r#"<span class="timeline-badge">Fou</span>"#));
        assert!(out.contains(r#"<span class="timeline-badge">R&amp;D</span>"#));
    }

    #[test]
    fn address_block_breaks_lines() {
        let out = render().into_string();
        assert!(out.contains("Estrada Nacional 360, N 94<br>Santa Catarina<br>2500-773 Caldas da Rainha<br>Portugal"));
        assert!(out.contains("CEO &amp; Chairman"));
    }
}
