//! Partnership model page.

use agcp_content::Link;
use agcp_content::partnership::{OFFERINGS, PARTNERSHIP_TYPES, PROCESS_STEPS};
use maud::{Markup, html};

use crate::components::{check_list, cta_band, page_hero, section_header};
use crate::reveal::{reveal, reveal_with, stagger};

/// Render the partnership page body.
pub fn render() -> Markup {
    html! {
        (page_hero(
            "Partnership Model",
            "License Our Nanotechnology Platforms",
            "We operate as a B2B enabling technology platform. Pharmaceutical companies license our proprietary nanotechnology to enhance their drug delivery systems, similar to how companies license BASF's enabling materials.",
        ))

        section.section id="process" {
            div.container {
                (reveal_with("centered section-head", 0.0, &section_header(
                    None,
                    "Partnership Process",
                    Some("A structured, milestone-driven process from initial consultation through commercial technology transfer and ongoing support."),
                )))
                div.grid-3 {
                    @for (i, step) in PROCESS_STEPS.iter().enumerate() {
                        (reveal(stagger(i, 0.1), &html! {
                            div.card.process-step {
                                span.process-number aria-hidden="true" { (step.number) }
                                span.chip { (step.duration) }
                                h3 { (step.title) }
                                p { (step.description) }
                            }
                        }))
                    }
                }
            }
        }

        section.section.section-surface id="offerings" {
            div.container {
                (reveal_with("centered section-head", 0.0, &section_header(
                    None,
                    "What We Provide",
                    Some("Comprehensive technology licensing packages designed to enable your success from formulation through commercialization."),
                )))
                div.grid-3 {
                    @for (i, offering) in OFFERINGS.iter().enumerate() {
                        (reveal(stagger(i, 0.15), &html! {
                            div.card {
                                h3 { (offering.title) }
                                @if !offering.description.is_empty() {
                                    p { (offering.description) }
                                }
                                (check_list(offering.items))
                            }
                        }))
                    }
                }
            }
        }

        section.section id="opportunities" {
            div.container {
                (reveal_with("centered section-head", 0.0, &section_header(
                    None,
                    "Partnership Opportunities",
                    Some("We offer flexible partnership structures to meet the specific needs of pharmaceutical companies at various stages of development."),
                )))
                div.grid-2 {
                    @for (i, kind) in PARTNERSHIP_TYPES.iter().enumerate() {
                        (reveal(stagger(i, 0.1), &html! {
                            div.card {
                                h3 { (kind.title) }
                                p { (kind.description) }
                                div.chip-row {
                                    @for feature in kind.items {
                                        span.chip { (feature) }
                                    }
                                }
                            }
                        }))
                    }
                }
            }
        }

        (cta_band(
            "Start the Conversation",
            "Whether you're a pharmaceutical company seeking technology licensing, or an investor exploring opportunities in pharmaceutical nanotechnology, we'd welcome the opportunity to discuss how we can work together.",
            Link { href: "/contact", label: "Partnership Inquiry" },
            Some(Link { href: "/technology-platforms", label: "Review Our Technology" }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_steps_show_duration() {
        let out = render().into_string();
        assert_eq!(out.matches(r#"class="card process-step""#).count(), 6);
        assert!(out.contains(r#"<span class="chip">Month 8-12</span>"#));
        assert!(out.contains("Optimization &amp; Validation"));
    }

    #[test]
    fn offerings_have_no_empty_paragraphs() {
        let out = render().into_string();
        assert!(!out.contains("<p></p>"));
        assert!(out.contains("Stability data packages (ICH compliant)"));
    }

    #[test]
    fn partnership_types_render_chips() {
        let out = render().into_string();
        assert!(out.contains(r#"<span class="chip">IP position</span>"#));
        assert!(out.contains("Strategic Investment"));
    }
}
