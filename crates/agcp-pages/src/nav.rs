//! Top navigation bar.
//!
//! [`NavState`] is owned by one rendered bar; the server renders its
//! initial value and `site.js` drives it in the browser:
//!
//! - `scrolled` turns on once `window.scrollY` exceeds the bar's
//!   `data-scroll-threshold` ([`SCROLL_THRESHOLD_PX`]) and off again below it
//! - the toggle button flips `menu_open`
//! - following a link in the mobile menu closes it; `scrolled` is untouched

use agcp_content::navigation::{NAV_CTA, NAV_LINKS};
use maud::{Markup, html};

use crate::icons;

/// Scroll offset past which the bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Scroll and menu state of one navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Solid background once the page has scrolled.
    pub scrolled: bool,
    /// Mobile menu expanded.
    pub menu_open: bool,
}

/// Render the bar for `current_path`.
pub fn render(current_path: &str, state: NavState) -> Markup {
    html! {
        nav.site-nav.is-scrolled[state.scrolled].is-open[state.menu_open]
            data-scroll-threshold=(SCROLL_THRESHOLD_PX) {
            div.container.nav-inner {
                a.brand href="/" {
                    span.brand-mark { (icons::LOGO_MARK) }
                    span.brand-text {
                        span.brand-name { "AGCP" }
                        span.brand-sub { "Farmaceuticos" }
                    }
                }
                div.nav-links {
                    @for link in &NAV_LINKS {
                        a.nav-link.is-active[link.href == current_path] href=(link.href)
                            aria-current=[(link.href == current_path).then_some("page")] {
                            (link.label)
                        }
                    }
                    a.button.button-primary.nav-cta href=(NAV_CTA.href) { (NAV_CTA.label) }
                }
                button.nav-toggle type="button" aria-label="Toggle navigation menu"
                    aria-controls="mobile-menu" aria-expanded=(if state.menu_open { "true" } else { "false" }) {
                    (icons::MENU_TOGGLE)
                }
            }
            div.mobile-menu id="mobile-menu" hidden[!state.menu_open] {
                @for link in &NAV_LINKS {
                    a.mobile-link.is-active[link.href == current_path] href=(link.href) { (link.label) }
                }
                a.button.button-primary.mobile-cta href=(NAV_CTA.href) { (NAV_CTA.label) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_current_link_active() {
        let out = render("/about", NavState::default()).into_string();
        assert!(out.contains(r#"<a class="nav-link is-active" href="/about" aria-current="page">About</a>"#));
        assert_eq!(out.matches(r#"class="nav-link is-active""#).count(), 1);
        assert!(out.contains("Partner With Us"));
    }

    #[test]
    fn initial_render_is_transparent_and_closed() {
        let out = render("/", NavState::default()).into_string();
        assert!(out.starts_with(r#"<nav class="site-nav" data-scroll-threshold="20">"#));
        assert!(out.contains(r#"aria-expanded="false""#));
        assert!(out.contains(r#"id="mobile-menu" hidden"#));
    }

    #[test]
    fn open_state_renders_open() {
        let state = NavState { scrolled: true, menu_open: true };
        let out = render("/", state).into_string();
        assert!(out.contains(r#"class="site-nav is-scrolled is-open""#));
        assert!(out.contains(r#"aria-expanded="true""#));
        assert!(!out.contains(" hidden"));
    }
}
