//! Site footer.

use agcp_content::COMPANY;
use agcp_content::navigation::{FOOTER_BLURB, FOOTER_GROUPS, FOOTER_TAGLINE};
use maud::{Markup, html};

use crate::context::RenderContext;
use crate::icons;

/// Render the footer.
pub fn render(ctx: &RenderContext) -> Markup {
    let [platforms, applications, company] = &FOOTER_GROUPS;
    html! {
        footer.site-footer {
            div.container {
                div.footer-grid {
                    div.footer-about {
                        div.brand {
                            span.brand-mark.brand-mark-dark { (icons::LOGO_MARK) }
                            span.brand-text {
                                span.brand-name { "AGCP" }
                                span.brand-sub { "Farmaceuticos" }
                            }
                        }
                        p.footer-blurb { (FOOTER_BLURB) }
                        span.badge.badge-dark { "EU GMP Certified" }
                    }
                    (link_column(platforms.title, platforms.links, None))
                    (link_column(applications.title, applications.links, None))
                    (link_column(company.title, company.links, Some(html! {
                        div.footer-contact {
                            p { a href=(COMPANY.mailto()) { (COMPANY.email) } }
                            p { a href=(COMPANY.tel()) { (COMPANY.phone_display) } }
                        }
                    })))
                }
                div.footer-bottom {
                    p { "© " (ctx.year()) " " (COMPANY.legal_name) ". All rights reserved." }
                    p { (FOOTER_TAGLINE) }
                }
            }
        }
    }
}

fn link_column(
    title: &str,
    links: &[agcp_content::Link],
    extra: Option<Markup>,
) -> Markup {
    html! {
        div.footer-column {
            h3.footer-heading { (title) }
            ul.footer-links {
                @for link in links {
                    li { a href=(link.href) { (link.label) } }
                }
            }
            @if let Some(extra) = extra {
                (extra)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> String {
        render(&RenderContext::with_year("https://agcp.pt", 2031)).into_string()
    }

    #[test]
    fn copyright_uses_context_year() {
        assert!(rendered().contains("© 2031 AGCP Farmaceuticos, LDA. All rights reserved."));
    }

    #[test]
    fn lists_all_three_groups() {
        let out = rendered();
        for heading in ["Technology Platforms", "Applications", "Company"] {
            assert!(out.contains(&format!(r#"<h3 class="footer-heading">{heading}</h3>"#)));
        }
        assert!(out.contains(r#"href="/about#leadership""#));
        assert!(out.contains(r#"href="/applications#pain-wound">Pain &amp; Wound Care</a>"#));
    }

    #[test]
    fn shows_contact_details_and_badge() {
        let out = rendered();
        assert!(out.contains(r#"<a href="mailto:lawrence@agcp.pt">lawrence@agcp.pt</a>"#));
        assert!(out.contains(r#"<a href="tel:+12402929392">(240) 292-9392</a>"#));
        assert!(out.contains("EU GMP Certified"));
    }
}
