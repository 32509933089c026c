//! Document head metadata and schema.org JSON-LD blocks.

use agcp_content::meta::{
    self, KEYWORDS, OG_LOCALE, OG_SITE_NAME, ROBOTS, TWITTER_CARD, TWITTER_DESCRIPTION,
};
use agcp_content::{COMPANY, FOUNDERS};
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

use crate::context::RenderContext;
use crate::route::Page;

/// `<head>` tags describing `page`.
pub fn head_tags(page: Page, ctx: &RenderContext) -> Markup {
    let meta = page.meta();
    let canonical = (page != Page::NotFound).then(|| ctx.absolute(page.path()));
    html! {
        title { (meta.document_title()) }
        meta name="description" content=(meta.description);
        meta name="keywords" content=(KEYWORDS.join(", "));
        meta name="author" content=(COMPANY.legal_name);
        meta name="robots" content=(ROBOTS);
        @if let Some(url) = &canonical {
            link rel="canonical" href=(url);
            meta property="og:url" content=(url);
        }
        meta property="og:type" content="website";
        meta property="og:locale" content=(OG_LOCALE);
        meta property="og:site_name" content=(OG_SITE_NAME);
        meta property="og:title" content=(meta.og_title);
        meta property="og:description" content=(meta.og_description);
        meta name="twitter:card" content=(TWITTER_CARD);
        meta name="twitter:title" content=(meta::DEFAULT_TITLE);
        meta name="twitter:description" content=(TWITTER_DESCRIPTION);
    }
}

/// Every structured-data block for `page`.
pub fn structured_data(page: Page, ctx: &RenderContext) -> Vec<Value> {
    let mut blocks = Vec::new();
    match page {
        Page::Home => blocks.push(organization(ctx)),
        Page::About => blocks.push(people()),
        _ => {}
    }
    if let Some(name) = page.meta().breadcrumb {
        blocks.push(breadcrumb(ctx, name, page.path()));
    }
    blocks
}

/// The company as a schema.org `Organization`.
pub fn organization(ctx: &RenderContext) -> Value {
    let founders: Vec<Value> = FOUNDERS
        .iter()
        .map(|f| json!({ "@type": "Person", "name": f.name, "jobTitle": f.job_title }))
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": COMPANY.legal_name,
        "url": ctx.base_url(),
        "logo": ctx.absolute(COMPANY.logo_path),
        "description": COMPANY.description,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": format!("{} {}", COMPANY.street, COMPANY.district),
            "addressLocality": COMPANY.locality,
            "postalCode": COMPANY.postal_code,
            "addressCountry": COMPANY.country_code,
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": COMPANY.phone_schema,
            "email": COMPANY.email,
            "contactType": "business development",
        },
        "sameAs": [],
        "founders": founders,
    })
}

/// The officers as an array of schema.org `Person` objects.
pub fn people() -> Value {
    let people: Vec<Value> = FOUNDERS
        .iter()
        .map(|f| {
            let mut person = json!({
                "@context": "https://schema.org",
                "@type": "Person",
                "name": f.name,
                "jobTitle": f.job_title,
                "worksFor": { "@type": "Organization", "name": COMPANY.legal_name },
            });
            if !f.alumni_of.is_empty() {
                person["alumniOf"] = f
                    .alumni_of
                    .iter()
                    .map(|school| json!({ "@type": "EducationalOrganization", "name": school }))
                    .collect();
            }
            person
        })
        .collect();
    Value::Array(people)
}

/// Two-level trail: Home, then the page.
pub fn breadcrumb(ctx: &RenderContext, name: &str, path: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            { "@type": "ListItem", "position": 1, "name": "Home", "item": ctx.base_url() },
            { "@type": "ListItem", "position": 2, "name": name, "item": ctx.absolute(path) },
        ],
    })
}

/// A `<script type="application/ld+json">` element for `value`.
///
/// `</` is written as `<\/` so no string in the data can close the
/// script element early; JSON parsers read both forms the same.
pub fn json_ld(value: &Value) -> Markup {
    let json = value.to_string().replace("</", r"<\/");
    html! {
        script type="application/ld+json" { (PreEscaped(json)) }
    }
}
