//! Building blocks shared by the page renderers.

use agcp_content::{Bar, Link, Spec};
use maud::{Markup, html};

use crate::icons;
use crate::reveal::reveal_with;

/// Dark banner at the top of every inner page.
pub fn page_hero(eyebrow: &str, title: &str, intro: &str) -> Markup {
    html! {
        section.page-hero {
            div.container {
                (reveal_with("narrow", 0.0, &html! {
                    p.eyebrow { (eyebrow) }
                    h1 { (title) }
                    p.lead { (intro) }
                }))
            }
        }
    }
}

/// Eyebrow, heading and intro above a section's body.
pub fn section_header(eyebrow: Option<&str>, title: &str, intro: Option<&str>) -> Markup {
    html! {
        @if let Some(eyebrow) = eyebrow {
            p.eyebrow { (eyebrow) }
        }
        h2.section-title { (title) }
        @if let Some(intro) = intro {
            p.section-intro { (intro) }
        }
    }
}

/// Navy closing band with one or two buttons.
pub fn cta_band(title: &str, body: &str, primary: Link, secondary: Option<Link>) -> Markup {
    html! {
        section.section.section-dark.cta-band {
            div.container.centered {
                (reveal_with("", 0.0, &html! {
                    h2.section-title { (title) }
                    p.section-intro { (body) }
                    div.button-row {
                        (button(primary, true))
                        @if let Some(link) = secondary {
                            (button(link, false))
                        }
                    }
                }))
            }
        }
    }
}

/// A link styled as a button.
pub fn button(link: Link, primary: bool) -> Markup {
    html! {
        a.button.button-primary[primary].button-ghost[!primary] href=(link.href) { (link.label) }
    }
}

/// Text link followed by an arrow.
pub fn arrow_link(link: Link) -> Markup {
    html! {
        a.arrow-link href=(link.href) { (link.label) (icons::ARROW_RIGHT) }
    }
}

/// Bullets with check marks.
pub fn check_list(items: &[&str]) -> Markup {
    html! {
        ul.check-list {
            @for item in items {
                li { (icons::CHECK) span { (item) } }
            }
        }
    }
}

/// Two-column grid of labelled value tiles.
pub fn spec_grid(specs: &[Spec]) -> Markup {
    html! {
        div.spec-grid {
            @for spec in specs {
                div.spec-tile {
                    p.spec-label { (spec.label) }
                    p.spec-value { (spec.value) }
                }
            }
        }
    }
}

/// Labelled horizontal bar.
pub fn bar(bar: &Bar) -> Markup {
    html! {
        div.bar {
            div.bar-legend {
                span.bar-label { (bar.label) }
                span.bar-value.is-highlight[bar.highlight] { (bar.value) }
            }
            div.bar-track {
                div.bar-fill.is-highlight[bar.highlight] style=(format!("width: {}%", bar.percent.min(100))) {}
            }
        }
    }
}

/// Horizontal rule between adjacent sections.
pub fn divider() -> Markup {
    html! {
        div.container { hr.divider; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_renders_heading() {
        let out = page_hero("About", "Pioneering", "Intro").into_string();
        assert!(out.starts_with(r#"<section class="page-hero">"#));
        assert!(out.contains("<h1>Pioneering</h1>"));
        assert!(out.contains(r#"<p class="eyebrow">About</p>"#));
    }

    #[test]
    fn section_header_skips_missing_parts() {
        let out = section_header(None, "Title", None).into_string();
        assert_eq!(out, r#"<h2 class="section-title">Title</h2>"#);
    }

    #[test]
    fn button_variants() {
        let link = Link { href: "/contact", label: "Go" };
        assert_eq!(
            button(link, true).into_string(),
            r#"<a class="button button-primary" href="/contact">Go</a>"#
        );
        assert_eq!(
            button(link, false).into_string(),
            r#"<a class="button button-ghost" href="/contact">Go</a>"#
        );
    }

    #[test]
    fn cta_band_secondary_is_optional() {
        let primary = Link { href: "/contact", label: "Contact" };
        let out = cta_band("T", "B", primary, None).into_string();
        assert_eq!(out.matches(r#"class="button "#).count(), 1);
    }

    #[test]
    fn check_list_escapes_items() {
        let out = check_list(&["<10nm & stable"]).into_string();
        assert!(out.contains("<span>&lt;10nm &amp; stable</span>"));
    }

    #[test]
    fn bar_width_is_clamped() {
        let b = Bar { label: "L", value: "V", percent: 140, highlight: true };
        let out = bar(&b).into_string();
        assert!(out.contains(r#"style="width: 100%""#));
        assert!(out.contains(r#"class="bar-fill is-highlight""#));
    }

    #[test]
    fn spec_grid_lists_every_tile() {
        let specs = [
            Spec { label: "A", value: "1" },
            Spec { label: "B", value: "2" },
        ];
        let out = spec_grid(&specs).into_string();
        assert_eq!(out.matches(r#"class="spec-tile""#).count(), 2);
    }
}
