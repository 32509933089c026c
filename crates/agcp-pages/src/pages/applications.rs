//! Applications page.

use agcp_content::Link;
use agcp_content::applications::{
    BERBERINE_ADVANTAGES, BERBERINE_APPLICATIONS, CUSTOM_SERVICES, PAIN_WOUND_BENEFITS,
    PAIN_WOUND_PIPELINE, StageStatus,
};
use maud::{Markup, html};

use crate::components::{check_list, cta_band, divider, page_hero};
use crate::icons;
use crate::reveal::{reveal, reveal_with, stagger};

/// Render the applications page body.
pub fn render() -> Markup {
    html! {
        (page_hero(
            "Validated Applications",
            "Proven Pharmaceutical Applications",
            "Our nanotechnology platforms have been validated through real-world pharmaceutical applications, demonstrating commercial viability for licensing partners.",
        ))

        section.section id="nano-berberine" {
            div.container.split {
                (reveal(0.0, &html! {
                    span.platform-badge { "Application 01" }
                    h2.section-title { "Nano-Berberine Platform" }
                    p.section-intro {
                        "Berberine is a potent bioactive compound with well-documented benefits for metabolic health. However, its clinical utility has been severely limited by poor oral bioavailability, a challenge our nanotechnology platform directly addresses."
                    }
                    div.block {
                        h3 { "The Bioavailability Challenge" }
                        p {
                            "Conventional berberine formulations suffer from poor absorption, rapid metabolism, and limited systemic exposure. Our nano-formulation technology dramatically enhances bioavailability, enabling therapeutic concentrations at lower doses."
                        }
                    }
                    div.block {
                        h3 { "Metabolic Disease Applications" }
                        (check_list(&BERBERINE_APPLICATIONS))
                    }
                }))
                (reveal(0.2, &html! {
                    div.panel {
                        h3 { "Platform Advantages" }
                        div.steps {
                            @for advantage in &BERBERINE_ADVANTAGES {
                                div.step {
                                    span.step-marker { (icons::TREND_UP) }
                                    div {
                                        p.step-title { (advantage.heading()) }
                                        p.step-detail { (advantage.detail) }
                                    }
                                }
                            }
                        }
                    }
                }))
            }
        }

        (divider())

        section.section id="pain-wound" {
            div.container.split.split-reverse {
                (reveal(0.0, &html! {
                    span.platform-badge { "Application 02" }
                    h2.section-title { "Pain & Wound Care Portfolio" }
                    p.section-intro {
                        "A comprehensive product portfolio leveraging our transdermal nanoparticle delivery platform for natural, plant-based pain management and advanced wound healing formulations."
                    }
                    div.block {
                        h3 { "Natural, Plant-Based Formulations" }
                        p {
                            "Our pain and wound care products utilize plant-derived active compounds enhanced through nanoparticle delivery, achieving therapeutic efficacy while maintaining natural formulation profiles preferred in modern pharmaceutical development."
                        }
                    }
                    div.block {
                        h3 { "Nano-Enhanced Absorption" }
                        (check_list(&PAIN_WOUND_BENEFITS))
                    }
                }))
                (reveal(0.2, &html! {
                    div.panel {
                        h3 { "Product Development Pipeline" }
                        ol.steps.pipeline {
                            @for (i, stage) in PAIN_WOUND_PIPELINE.iter().enumerate() {
                                li.step {
                                    span.step-marker {
                                        @if stage.status == StageStatus::Completed {
                                            (icons::CHECK)
                                        } @else {
                                            (i + 1)
                                        }
                                    }
                                    div {
                                        p.step-title { (stage.phase) }
                                        span class=(format!("pipeline-status status-{}", stage.status.slug())) {
                                            (stage.status.as_str())
                                        }
                                        p.step-detail { (stage.description) }
                                    }
                                }
                            }
                        }
                    }
                }))
            }
        }

        (divider())

        section.section id="custom" {
            div.container {
                (reveal_with("centered section-head", 0.0, &html! {
                    span.platform-badge { "Application 03" }
                    h2.section-title { "Custom Pharmaceutical Development" }
                    p.section-intro {
                        "Partner with AGCP to apply our nanotechnology platforms to your specific drug delivery challenges. We provide end-to-end support from formulation development through regulatory preparation."
                    }
                }))
                div.grid-3 {
                    @for (i, service) in CUSTOM_SERVICES.iter().enumerate() {
                        (reveal(stagger(i, 0.15), &html! {
                            div.card {
                                h3 { (service.title) }
                                p { (service.description) }
                                div.block { (check_list(service.items)) }
                            }
                        }))
                    }
                }
            }
        }

        (cta_band(
            "Explore Licensing Opportunities",
            "Whether you're interested in our validated applications or custom development, we're ready to discuss how our platforms can enhance your pharmaceutical pipeline.",
            Link { href: "/contact", label: "Contact Our Team" },
            Some(Link { href: "/partnership", label: "View Partnership Model" }),
        ))
    }
}
