//! The HTML document every page is wrapped in.

use maud::{DOCTYPE, Markup, html};

use crate::assets;
use crate::context::RenderContext;
use crate::nav::{self, NavState};
use crate::route::Page;
use crate::{footer, seo};

/// Wrap `body` in the document shell for `page`.
///
/// `nav_path` is the path the navigation bar highlights; the 404 page
/// passes the request path so nothing is marked active.
pub fn document(ctx: &RenderContext, page: Page, nav_path: &str, body: &Markup) -> Markup {
    let structured = seo::structured_data(page, ctx);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (seo::head_tags(page, ctx))
                link rel="icon" href="/favicon.ico";
                link rel="stylesheet" href=(assets::STYLESHEET_PATH);
                @for block in &structured {
                    (seo::json_ld(block))
                }
            }
            body class=(format!("page page-{}", page.slug())) {
                (nav::render(nav_path, NavState::default()))
                main { (body) }
                (footer::render(ctx))
                script src=(assets::SCRIPT_PATH) defer {}
            }
        }
    }
}
