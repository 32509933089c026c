//! # agcp-pages
//!
//! Server-side rendering for every route of the site. Page bodies are built
//! from `agcp-content` records with `maud`, then wrapped by
//! [`layout::document`] in the shared head, navigation bar and footer.
//!
//! Rendering is pure: the same [`Page`], [`RenderContext`] and contact view
//! always produce the same markup.

#![deny(unsafe_code)]

pub mod assets;
pub mod components;
pub mod context;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod nav;
pub mod pages;
pub mod reveal;
pub mod route;
pub mod seo;

use agcp_contact::{ContactForm, ContactView};
use maud::Markup;

pub use context::RenderContext;
pub use route::Page;

/// Render a full document for `page`.
///
/// The contact page renders its empty form; use [`render_contact`] to show
/// a specific view.
pub fn render_page(page: Page, ctx: &RenderContext) -> Markup {
    let body = match page {
        Page::Home => pages::home::render(),
        Page::Technology => pages::technology::render(),
        Page::Applications => pages::applications::render(),
        Page::Science => pages::science::render(),
        Page::Partnership => pages::partnership::render(),
        Page::About => pages::about::render(),
        Page::Contact => return render_contact(ctx, ContactForm::new().view()),
        Page::NotFound => return render_not_found(ctx, page.path()),
    };
    layout::document(ctx, page, page.path(), &body)
}

/// Render the contact page for a given form view.
pub fn render_contact(ctx: &RenderContext, view: ContactView<'_>) -> Markup {
    layout::document(ctx, Page::Contact, Page::Contact.path(), &pages::contact::render(view))
}

/// Render the 404 page for an unmatched `request_path`.
pub fn render_not_found(ctx: &RenderContext, request_path: &str) -> Markup {
    layout::document(ctx, Page::NotFound, request_path, &pages::not_found::render())
}
