//! The inquiry draft and its fields.

use std::fmt;

use crate::errors::ContactError;
use crate::{FORM_NAME, HONEYPOT_FIELD};

/// Nature of an inquiry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InquiryType {
    /// Anything else.
    #[default]
    General,
    /// Licensing or co-development.
    Partnership,
    /// Investors.
    Investment,
}

impl InquiryType {
    /// All variants in menu order.
    pub const ALL: [Self; 3] = [Self::General, Self::Partnership, Self::Investment];

    /// Wire and display value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Partnership => "Partnership Interest",
            Self::Investment => "Investment Inquiry",
        }
    }

    /// Parse a wire value. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form field, identified by its wire key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Full name.
    Name,
    /// Company.
    Company,
    /// Role or title.
    Role,
    /// Email address.
    Email,
    /// Phone, optional.
    Phone,
    /// [`InquiryType`].
    InquiryType,
    /// Free text.
    Message,
}

impl Field {
    /// Every field in wire order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Company,
        Self::Role,
        Self::Email,
        Self::Phone,
        Self::InquiryType,
        Self::Message,
    ];

    /// Fields that must be non-empty before a submission is sent.
    pub const REQUIRED: [Self; 5] = [
        Self::Name,
        Self::Company,
        Self::Role,
        Self::Email,
        Self::Message,
    ];

    /// Form key, also the HTML `name` and `id`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Role => "role",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::InquiryType => "inquiryType",
            Self::Message => "message",
        }
    }

    /// Look a field up by its form key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Whether the submission gate checks this field.
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

/// Everything a visitor has typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    /// Full name.
    pub name: String,
    /// Company.
    pub company: String,
    /// Role or title.
    pub role: String,
    /// Email address.
    pub email: String,
    /// Phone, optional.
    pub phone: String,
    /// Nature of the inquiry.
    pub inquiry_type: InquiryType,
    /// Free text.
    pub message: String,
}

impl InquiryDraft {
    /// Current value of a field as it would be sent.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Role => &self.role,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::InquiryType => self.inquiry_type.as_str(),
            Field::Message => &self.message,
        }
    }

    /// Replace one field's value. Only `inquiryType` can fail; on failure
    /// the draft is left untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), ContactError> {
        let value = value.into();
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Role => &mut self.role,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
            Field::InquiryType => {
                self.inquiry_type = InquiryType::parse(&value)
                    .ok_or(ContactError::UnknownInquiryType(value))?;
                return Ok(());
            }
        };
        *slot = value;
        Ok(())
    }

    /// Fields that block submission: required fields that are blank, and
    /// an email that does not look like one.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|&field| {
                let value = self.get(field).trim();
                value.is_empty() || (field == Field::Email && !is_plausible_email(value))
            })
            .collect()
    }

    /// Whether the draft passes the submission gate.
    pub fn is_complete(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// The request body: every field in wire order, then `form-name` and
    /// an empty honeypot.
    pub fn encode(&self) -> Result<String, ContactError> {
        let mut pairs: Vec<(&str, &str)> = Field::ALL
            .into_iter()
            .map(|field| (field.key(), self.get(field)))
            .collect();
        pairs.push(("form-name", FORM_NAME));
        pairs.push((HONEYPOT_FIELD, ""));
        Ok(serde_urlencoded::to_string(pairs)?)
    }
}

/// `local@domain`, both sides non-empty, no whitespace, a single `@`.
pub fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
