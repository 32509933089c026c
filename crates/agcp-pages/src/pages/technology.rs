//! Technology platforms page: graphene, transdermal, blood-brain barrier.

use agcp_content::Link;
use agcp_content::platforms::{
    BBB_SPECS, BBB_STABILITY_BARS, BBB_VALIDATION, GRAPHENE_ADVANTAGES, GRAPHENE_COST_BARS,
    GRAPHENE_SPECS, TRANSDERMAL_ADVANTAGES, TRANSDERMAL_SPECS, TRANSDERMAL_STEPS,
};
use maud::{Markup, html};

use crate::components::{bar, check_list, cta_band, divider, page_hero, spec_grid};
use crate::icons;
use crate::reveal::reveal;

/// Render the technology page body.
pub fn render() -> Markup {
    html! {
        (page_hero(
            "Technology Platforms",
            "Three Proprietary Nanotechnology Platforms",
            "Each platform represents years of pharmaceutical R&D, validated through rigorous testing and ready for commercial licensing partnerships.",
        ))

        section.section id="graphene" {
            div.container.split {
                (reveal(0.0, &html! {
                    span.platform-badge { "Platform 01" }
                    h2.section-title { "Scalable Graphene Production" }
                    p.section-intro {
                        "Our proprietary manufacturing process produces pharmaceutical-grade monolayer graphene at a fraction of conventional costs, unlocking applications previously limited by material expense."
                    }
                    div.block {
                        h3 { "Manufacturing Advantages" }
                        (check_list(&GRAPHENE_ADVANTAGES))
                    }
                    div.block {
                        h3 { "Pharmaceutical Applications" }
                        p {
                            "Graphene's unique properties enable next-generation drug delivery systems, including enhanced loading capacity for therapeutic compounds, improved biocompatibility profiles, and novel approaches to targeted delivery that were previously cost-prohibitive."
                        }
                    }
                }))
                (reveal(0.2, &html! {
                    div.panel {
                        h3 { "Cost Comparison" }
                        @for b in &GRAPHENE_COST_BARS {
                            (bar(b))
                        }
                        p.panel-note {
                            "Cost advantage enables pharmaceutical-scale graphene applications for the first time."
                        }
                    }
                    (spec_grid(&GRAPHENE_SPECS))
                }))
            }
        }

        (divider())

        section.section id="transdermal" {
            div.container.split.split-reverse {
                (reveal(0.0, &html! {
                    span.platform-badge { "Platform 02" }
                    h2.section-title { "Transdermal Nanoparticle Delivery Systems" }
                    p.section-intro {
                        "Our nanoparticle delivery systems optimize particle size and surface characteristics to enhance penetration through the skin barrier, enabling targeted topical drug delivery with superior absorption profiles."
                    }
                    div.block {
                        h3 { "Mechanism of Action" }
                        p {
                            "Optimized nanoparticles penetrate the stratum corneum through intercellular pathways, delivering active pharmaceutical ingredients to target tissue layers with significantly enhanced bioavailability compared to conventional topical formulations."
                        }
                    }
                    div.block {
                        h3 { "Key Advantages" }
                        (check_list(&TRANSDERMAL_ADVANTAGES))
                    }
                }))
                (reveal(0.2, &html! {
                    div.panel {
                        h3 { "Transdermal Delivery Process" }
                        div.steps {
                            @for step in &TRANSDERMAL_STEPS {
                                div.step {
                                    span.step-marker { (step.marker) }
                                    div {
                                        p.step-title { (step.title) }
                                        p.step-detail { (step.description) }
                                    }
                                }
                            }
                        }
                    }
                    (spec_grid(&TRANSDERMAL_SPECS))
                }))
            }
        }

        (divider())

        section.section id="bbb" {
            div.container.split {
                (reveal(0.0, &html! {
                    span.platform-badge { "Platform 03" }
                    h2.section-title { "Blood-Brain Barrier Nanoemulsion Technology" }
                    p.section-intro {
                        "Our proprietary nanoemulsion platform creates oil-in-water nano-suspensions with particles below 10nm, enabling drug delivery across the blood-brain barrier, opening CNS therapeutic pathways previously considered impossible."
                    }
                    div.block {
                        h3 { "Breakthrough Capability" }
                        p {
                            "The blood-brain barrier represents one of the greatest challenges in pharmaceutical development, blocking over 98% of therapeutic compounds from reaching the central nervous system. Our nanoemulsion technology achieves particle sizes below 10nm, enabling passage through the BBB and opening new treatment possibilities for neurological conditions."
                        }
                    }
                    div.block {
                        h3 { "Validation & Stability" }
                        (check_list(&BBB_VALIDATION))
                    }
                }))
                (reveal(0.2, &html! {
                    div.panel {
                        h3 { "Particle Size Achievement" }
                        (icons::PARTICLE_COMPARISON)
                        p.panel-note.centered {
                            "Our nanoemulsion particles are 10-20x smaller than typical nanoparticles, enabling BBB penetration."
                        }
                    }
                    div.panel {
                        h3 { "Stability Data" }
                        @for b in &BBB_STABILITY_BARS {
                            (bar(b))
                        }
                    }
                    (spec_grid(&BBB_SPECS))
                }))
            }
        }

        (cta_band(
            "License Our Technology Platforms",
            "Partner with AGCP to integrate our validated nanotechnology platforms into your pharmaceutical development pipeline.",
            Link { href: "/contact", label: "Discuss Licensing" },
            Some(Link { href: "/partnership", label: "Partnership Model" }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_match_footer_links() {
        let out = render().into_string();
        for anchor in ["graphene", "transdermal", "bbb"] {
            assert!(out.contains(&format!(r#"id="{anchor}""#)));
        }
    }

    #[test]
    fn cost_bars_use_content_widths() {
        let out = render().into_string();
        assert!(out.contains("width: 5%"));
        assert!(out.contains("width: 40%"));
        assert!(out.contains("width: 75%"));
    }

    #[test]
    fn process_steps_in_order() {
        let out = render().into_string();
        let first = out.find("Nanoparticle Formulation").unwrap();
        let last = out.find("Enhanced Absorption").unwrap();
        assert!(first < last);
        assert_eq!(out.matches(r#"class="spec-grid""#).count(), 3);
    }
}
