//! Contact page: the inquiry form or its confirmation, plus the contact
//! details sidebar.

use agcp_contact::{ContactView, FORM_NAME, Field, HONEYPOT_FIELD, InquiryDraft, InquiryType};
use agcp_content::{ADDRESS_LINES, COMPANY};
use maud::{Markup, html};

use crate::components::page_hero;
use crate::icons;
use crate::reveal::{reveal, reveal_with};

/// Where the form posts.
pub const SUBMIT_ACTION: &str = "/contact";

/// Where "Send Another Inquiry" posts.
pub const RESET_ACTION: &str = "/contact/reset";

/// Render the contact page body for `view`.
pub fn render(view: ContactView<'_>) -> Markup {
    let panel = match view {
        ContactView::Form { draft, error, invalid } => form(draft, error, invalid),
        ContactView::Confirmation => confirmation(),
    };
    html! {
        (page_hero(
            "Contact Us",
            "Partnership & Investment Inquiries",
            "We welcome inquiries from pharmaceutical companies, strategic investors, and organizations interested in our nanotechnology licensing platforms.",
        ))
        section.section {
            div.container.contact-grid {
                (reveal_with("contact-main", 0.0, &panel))
                (reveal(0.2, &sidebar()))
            }
        }
    }
}

fn confirmation() -> Markup {
    html! {
        div.confirmation role="status" {
            span.step-marker { (icons::CHECK) }
            h2.section-title { "Thank You for Your Inquiry" }
            p.section-intro {
                "We have received your message and will respond within 2 business days. For urgent inquiries, please contact us directly via email."
            }
            form method="post" action=(RESET_ACTION) {
                button.arrow-link type="submit" { "Send Another Inquiry" }
            }
        }
    }
}

fn form(draft: &InquiryDraft, error: Option<&str>, invalid: &[Field]) -> Markup {
    let text_field = |field: Field, label: &str, kind: &str, placeholder: &str| {
        let required = field.is_required();
        html! {
            div.field {
                label for=(field.key()) {
                    (label)
                    @if required { " " span.required { "*" } } @else { " " span.optional { "(optional)" } }
                }
                input type=(kind) id=(field.key()) name=(field.key()) value=(draft.get(field))
                    placeholder=(placeholder) required[required]
                    aria-invalid=[invalid.contains(&field).then_some("true")];
            }
        }
    };
    html! {
        form.contact-form name=(FORM_NAME) method="post" action=(SUBMIT_ACTION) {
            input type="hidden" name="form-name" value=(FORM_NAME);
            p.honeypot aria-hidden="true" {
                label {
                    "Don't fill this out: "
                    input name=(HONEYPOT_FIELD) tabindex="-1" autocomplete="off";
                }
            }
            div {
                h2.section-title { "Send Us a Message" }
                p.section-intro {
                    "Please provide your details and the nature of your inquiry. All fields marked with * are required."
                }
            }
            @if let Some(message) = error {
                div.form-error role="alert" { (message) }
            }
            div.form-row {
                (text_field(Field::Name, "Full Name", "text", "Your full name"))
                (text_field(Field::Company, "Company", "text", "Company name"))
            }
            div.form-row {
                (text_field(Field::Role, "Role", "text", "Your role/title"))
                (text_field(Field::Email, "Email", "email", "your@email.com"))
            }
            div.form-row {
                (text_field(Field::Phone, "Phone", "tel", "+1 (000) 000-0000"))
                div.field {
                    label for=(Field::InquiryType.key()) { "Inquiry Type " span.required { "*" } }
                    select id=(Field::InquiryType.key()) name=(Field::InquiryType.key()) required {
                        @for kind in InquiryType::ALL {
                            option value=(kind.as_str()) selected[kind == draft.inquiry_type] { (kind.as_str()) }
                        }
                    }
                }
            }
            div.field {
                label for=(Field::Message.key()) { "Message " span.required { "*" } }
                textarea id=(Field::Message.key()) name=(Field::Message.key()) rows="5" required
                    placeholder="Please describe your inquiry, including any specific technology platforms or partnership interests..."
                    aria-invalid=[invalid.contains(&Field::Message).then_some("true")] {
                    (draft.message)
                }
            }
            button.button.button-primary type="submit" { "Submit Inquiry" }
        }
    }
}

fn sidebar() -> Markup {
    html! {
        aside.contact-sidebar {
            div.block {
                h3 { "Contact Information" }
                div.contact-item {
                    (icons::MAIL)
                    div {
                        p.step-title { "Email" }
                        a.arrow-link href=(COMPANY.mailto()) { (COMPANY.email) }
                    }
                }
                div.contact-item {
                    (icons::PHONE)
                    div {
                        p.step-title { "Phone" }
                        a.arrow-link href=(COMPANY.tel()) { (COMPANY.phone_display) }
                    }
                }
                div.contact-item {
                    (icons::PIN)
                    div {
                        p.step-title { "Address" }
                        address.step-detail {
                            @for (i, line) in ADDRESS_LINES.iter().enumerate() {
                                @if i > 0 { br; }
                                (line)
                            }
                        }
                    }
                }
            }
            div.panel {
                h3 { "Response Time" }
                p.step-detail {
                    "We aim to respond to all inquiries within 2 business days. Partnership and investment inquiries are prioritized and may receive faster responses."
                }
            }
            div.panel {
                h3 { "For Immediate Assistance" }
                p.step-detail {
                    "For time-sensitive partnership or investment discussions, please email us directly at "
                    a href=(COMPANY.mailto()) { (COMPANY.email) }
                    " with “Urgent” in the subject line."
                }
            }
            div.panel {
                h3 { "Interested in Our Technology?" }
                p.step-detail { "Review our technology platforms and partnership model before reaching out." }
                p { a.arrow-link href="/technology-platforms" { "View Technology Platforms →" } }
                p { a.arrow-link href="/partnership" { "Partnership Model →" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use agcp_contact::{ContactForm, FAILURE_MESSAGE};

    use super::*;

    fn jane() -> InquiryDraft {
        InquiryDraft {
            name: "Jane Doe".into(),
            company: "Acme Pharma".into(),
            role: "VP BD".into(),
            email: "jane@acme.com".into(),
            phone: String::new(),
            inquiry_type: InquiryType::Partnership,
            message: "Interested in BBB platform.".into(),
        }
    }

    #[test]
    fn empty_form_defaults_to_general_inquiry() {
        let out = render(ContactForm::new().view()).into_string();
        assert!(out.contains("Send Us a Message"));
        assert!(out.contains(r#"<option value="General Inquiry" selected>General Inquiry</option>"#));
        assert!(out.contains(r#"<form class="contact-form" name="contact" method="post" action="/contact">"#));
        assert!(!out.contains("role=\"alert\""));
        assert!(!out.contains("aria-invalid"));
    }

    #[test]
    fn browser_checks_required_fields() {
        let out = render(ContactForm::new().view()).into_string();
        assert!(!out.contains("novalidate"));
        for key in ["name", "company", "role", "email"] {
            assert!(out.contains(&format!(r#"name="{key}" value="""#)), "{key}");
        }
        assert!(out.contains(r#"<input type="email" id="email" name="email" value="" placeholder="your@email.com" required>"#));
        assert!(out.contains(r#"name="role" value="" placeholder="Your role/title" required>"#));
        assert!(out.contains(r#"<textarea id="message" name="message" rows="5" required"#));
        assert!(!out.contains(r#"placeholder="+1 (000) 000-0000" required"#));
    }

    #[test]
    fn form_carries_hidden_fields() {
        let out = render(ContactForm::new().view()).into_string();
        assert!(out.contains(r#"<input type="hidden" name="form-name" value="contact">"#));
        assert!(out.contains(r#"name="bot-field""#));
    }

    #[test]
    fn values_are_retained_and_escaped() {
        let mut draft = jane();
        draft.company = "Acme & <Sons>".into();
        let view = ContactView::Form { draft: &draft, error: Some(FAILURE_MESSAGE), invalid: &[] };
        let out = render(view).into_string();
        assert!(out.contains(r#"value="Jane Doe""#));
        assert!(out.contains(r#"value="Acme &amp; &lt;Sons&gt;""#));
        assert!(out.contains("Interested in BBB platform.</textarea>"));
        assert!(out.contains(r#"<option value="Partnership Interest" selected>"#));
        assert!(out.contains(&format!(r#"<div class="form-error" role="alert">{FAILURE_MESSAGE}</div>"#)));
        assert!(out.contains("Submit Inquiry"));
    }

    #[test]
    fn invalid_fields_are_marked() {
        let draft = InquiryDraft::default();
        let invalid = [Field::Name, Field::Message];
        let view = ContactView::Form { draft: &draft, error: None, invalid: &invalid };
        let out = render(view).into_string();
        assert_eq!(out.matches(r#"aria-invalid="true""#).count(), 2);
        assert!(out.contains(r#"name="name" value="" placeholder="Your full name" required aria-invalid="true""#));
    }

    #[test]
    fn phone_is_optional() {
        let out = render(ContactForm::new().view()).into_string();
        assert!(out.contains(r#"name="phone" value="" placeholder="+1 (000) 000-0000">"#));
        assert!(out.contains("(optional)"));
    }

    #[test]
    fn confirmation_offers_reset() {
        let out = render(ContactView::Confirmation).into_string();
        assert!(out.contains("Thank You for Your Inquiry"));
        assert!(out.contains(r#"<form method="post" action="/contact/reset">"#));
        assert!(out.contains("Send Another Inquiry"));
        assert!(!out.contains("Submit Inquiry"));
    }

    #[test]
    fn sidebar_lists_contact_details() {
        let out = render(ContactView::Confirmation).into_string();
        assert!(out.contains(r#"href="mailto:lawrence@agcp.pt""#));
        assert!(out.contains("(240) 292-9392"));
        assert!(out.contains("2500-773 Caldas da Rainha"));
    }
}
