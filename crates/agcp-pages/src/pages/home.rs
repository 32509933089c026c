//! Landing page.

use agcp_content::Link;
use agcp_content::home::{PLATFORMS, TRUST_SIGNALS, VALUE_PROPS};
use maud::{Markup, html};

use crate::components::{arrow_link, button, cta_band, section_header};
use crate::icons;
use crate::reveal::{reveal, reveal_with, stagger};

/// Render the landing page body.
pub fn render() -> Markup {
    html! {
        section.home-hero {
            div.hero-backdrop { (icons::HERO_BACKDROP) }
            div.container {
                (reveal_with("narrow", 0.0, &html! {
                    div.hero-pill {
                        span.pulse-dot {}
                        span { "B2B Pharmaceutical Technology Platform" }
                    }
                    h1 { "Enabling Pharmaceutical Innovation Through " em { "Nanotechnology" } }
                    p.lead {
                        "B2B platform providing proprietary drug delivery technologies for pharmaceutical licensing. Three validated nanotechnology platforms ready for commercial partnership."
                    }
                    div.button-row {
                        a.button.button-primary href="/technology-platforms" {
                            "Our Technology Platforms" (icons::ARROW_RIGHT)
                        }
                        (button(Link { href: "/contact", label: "Partner With Us" }, false))
                    }
                }))
            }
            div.hero-fade {}
        }

        section.section id="platforms" {
            div.container {
                (reveal_with("centered section-head", 0.0, &section_header(
                    Some("Core Technology Platforms"),
                    "Three Proprietary Nanotechnology Platforms",
                    Some("Each platform addresses a critical pharmaceutical delivery challenge with validated, scalable solutions ready for commercial licensing."),
                )))
                div.grid-3 {
                    @for (i, platform) in PLATFORMS.iter().enumerate() {
                        (reveal(stagger(i, 0.15), &html! {
                            a.card href=(platform.href) {
                                (icons::platform(platform.icon))
                                h3 { (platform.title) }
                                p { (platform.description) }
                                div.card-stat {
                                    div {
                                        p.stat-value { (platform.stat) }
                                        p.stat-label { (platform.stat_label) }
                                    }
                                    span.learn-more { "Learn more →" }
                                }
                            }
                        }))
                    }
                }
            }
        }

        section.section.section-surface {
            div.container.split {
                (reveal(0.0, &html! {
                    (section_header(
                        Some("Why AGCP"),
                        "Your Drug Delivery Technology Partner",
                        Some("Pharmaceutical companies choose AGCP as their nanotechnology platform partner for our proven technology, regulatory expertise, and cost-effective manufacturing capabilities."),
                    ))
                    div.block {
                        (arrow_link(Link { href: "/partnership", label: "Explore our partnership model" }))
                    }
                }))
                div.grid-2 {
                    @for (i, prop) in VALUE_PROPS.iter().enumerate() {
                        (reveal(stagger(i, 0.1), &html! {
                            div.card {
                                h3 { (prop.title) }
                                p { (prop.description) }
                            }
                        }))
                    }
                }
            }
        }

        section.section {
            div.container {
                (reveal_with("centered section-head", 0.0, &section_header(
                    None,
                    "Validated Performance Metrics",
                    Some("Our technology platforms are backed by extensive validation data and pharmaceutical-grade manufacturing standards."),
                )))
                div.grid-3 {
                    @for (i, signal) in TRUST_SIGNALS.iter().enumerate() {
                        (reveal(stagger(i, 0.1), &html! {
                            div.metric {
                                p.metric-value { (signal.value) }
                                p.metric-label { (signal.label) }
                                p.metric-detail { (signal.description) }
                            }
                        }))
                    }
                }
            }
        }

        (cta_band(
            "Ready to Enhance Your Drug Delivery Pipeline?",
            "Discover how AGCP's nanotechnology platforms can accelerate your pharmaceutical development. We welcome partnership, licensing, and investment inquiries.",
            Link { href: "/contact", label: "Contact for Partnership" },
            Some(Link { href: "/technology-platforms", label: "View Our Technology" }),
        ))
    }
}
