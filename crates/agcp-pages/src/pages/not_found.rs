//! 404 page.

use agcp_content::Link;
use maud::{Markup, html};

use crate::components::button;

/// Render the 404 body.
pub fn render() -> Markup {
    html! {
        section.section.section-surface.not-found {
            div.container.narrow.centered {
                p.metric-value { "404" }
                h1 { "Page Not Found" }
                p.section-intro {
                    "The page you're looking for doesn't exist. Please check the URL or navigate to one of our main sections."
                }
                div.button-row {
                    (button(Link { href: "/", label: "Back to Home" }, true))
                    a.button.button-outline href="/contact" { "Contact Us" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_home_and_contact() {
        let out = render().into_string();
        assert!(out.contains("<h1>Page Not Found</h1>"));
        assert!(out.contains(r#"href="/">Back to Home</a>"#));
        assert!(out.contains(r#"href="/contact">Contact Us</a>"#));
    }
}
