//! Science & validation page.

use agcp_content::Link;
use agcp_content::science::{
    QUALITY_SYSTEMS, REGULATORY_CAPABILITIES, REGULATORY_EXPERTISE, STABILITY_RESULTS,
    STABILITY_TIMELINE,
};
use maud::{Markup, html};

use crate::components::{button, check_list, cta_band, page_hero, section_header};
use crate::reveal::{reveal, reveal_with, stagger};

/// Render the science page body.
pub fn render() -> Markup {
    html! {
        (page_hero(
            "Science & Validation",
            "Rigorous Scientific Validation",
            "Our technology platforms are supported by extensive stability data, pharmaceutical-grade manufacturing standards, and deep regulatory expertise.",
        ))

        section.section id="stability" {
            div.container.split {
                (reveal(0.0, &html! {
                    (section_header(
                        None,
                        "Stability Data",
                        Some("Pharmaceutical formulation stability is critical for commercial viability. Our platforms demonstrate industry-leading stability profiles validated through rigorous long-term testing protocols."),
                    ))
                    @for result in &STABILITY_RESULTS {
                        div.card.block {
                            h3 { (result.label) }
                            p.metric-value { (result.value) }
                            p { (result.description) }
                        }
                    }
                }))
                (reveal(0.2, &html! {
                    div.panel {
                        h3 { "Stability Testing Timeline" }
                        ol.timeline {
                            @for step in &STABILITY_TIMELINE {
                                li.timeline-item {
                                    span.timeline-badge { (step.marker) }
                                    div {
                                        p.step-title { (step.title) }
                                        p.step-detail { (step.description) }
                                    }
                                }
                            }
                        }
                    }
                }))
            }
        }

        section.section.section-surface id="quality" {
            div.container {
                (reveal_with("centered section-head", 0.0, &section_header(
                    None,
                    "EU GMP Compliance & Quality Systems",
                    Some("Our manufacturing operations meet the stringent requirements of European Good Manufacturing Practice certification, ensuring consistent pharmaceutical-grade output."),
                )))
                div.grid-3 {
                    @for (i, system) in QUALITY_SYSTEMS.iter().enumerate() {
                        (reveal(stagger(i, 0.1), &html! {
                            div.card {
                                h3 { (system.title) }
                                p { (system.description) }
                                div.block { (check_list(system.items)) }
                            }
                        }))
                    }
                }
            }
        }

        section.section id="regulatory" {
            div.container.split {
                (reveal(0.0, &html! {
                    (section_header(
                        None,
                        "Regulatory Pathway Expertise",
                        Some("Navigating the regulatory landscape for nanotechnology-based pharmaceuticals requires specialized expertise. Our team provides comprehensive regulatory support to accelerate your path to market."),
                    ))
                    div.block { (check_list(&REGULATORY_EXPERTISE)) }
                }))
                (reveal(0.2, &html! {
                    div.panel {
                        h3 { "Key Regulatory Capabilities" }
                        div.spec-grid {
                            @for capability in &REGULATORY_CAPABILITIES {
                                div.spec-tile.centered {
                                    p.metric-value { (capability.value) }
                                    p.spec-label { (capability.label) }
                                }
                            }
                        }
                    }
                }))
            }
        }

        section.section.section-surface id="publications" {
            div.container.narrow.centered {
                (reveal(0.0, &html! {
                    (section_header(
                        None,
                        "Research & Publications",
                        Some("Our scientific team actively contributes to the advancement of pharmaceutical nanotechnology. Technical publications and white papers are available upon request for qualified pharmaceutical partners."),
                    ))
                    div.card.block {
                        p {
                            "For access to our technical documentation, stability data packages, and research publications, please contact our scientific team through our partnership inquiry process."
                        }
                        div.button-row {
                            (button(Link { href: "/contact", label: "Request Technical Documentation" }, true))
                        }
                    }
                }))
            }
        }

        (cta_band(
            "Review Our Scientific Credentials",
            "Interested in detailed technical data, stability reports, or regulatory documentation? Our team is ready to provide comprehensive information for qualified partners.",
            Link { href: "/contact", label: "Contact Scientific Team" },
            None,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_lists_every_checkpoint() {
        let out = render().into_string();
        assert_eq!(out.matches(r#"class="timeline-item""#).count(), STABILITY_TIMELINE.len());
        assert!(out.contains(r#"<span class="timeline-badge">18+</span>"#));
    }

    #[test]
    fn quality_cards_and_capabilities() {
        let out = render().into_string();
        for system in &QUALITY_SYSTEMS {
            assert!(out.contains(system.title));
        }
        assert!(out.contains(r#"<p class="metric-value">ICH</p>"#));
        assert!(out.contains("&lt;10nm Consistent"));
    }

    #[test]
    fn single_closing_button() {
        let out = render().into_string();
        assert!(out.contains("Contact Scientific Team"));
        assert!(!out.contains("button-ghost"));
    }
}
