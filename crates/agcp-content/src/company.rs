//! Company facts used by the footer, the contact page and structured data.

/// Registered company details.
#[derive(Clone, Copy, Debug)]
pub struct Company {
    /// Legal name.
    pub legal_name: &'static str,
    /// Brand name used in titles and Open Graph.
    pub brand: &'static str,
    /// One-line description for structured data.
    pub description: &'static str,
    /// Business development email.
    pub email: &'static str,
    /// Phone number as displayed.
    pub phone_display: &'static str,
    /// Phone number for `tel:` links.
    pub phone_tel: &'static str,
    /// Phone number in schema.org form.
    pub phone_schema: &'static str,
    /// Street line.
    pub street: &'static str,
    /// District.
    pub district: &'static str,
    /// Postal code.
    pub postal_code: &'static str,
    /// Town.
    pub locality: &'static str,
    /// Country name.
    pub country: &'static str,
    /// ISO country code.
    pub country_code: &'static str,
    /// Logo path relative to the site origin.
    pub logo_path: &'static str,
}

impl Company {
    /// `mailto:` href for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` href for the phone number.
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone_tel)
    }
}

/// AGCP Farmaceuticos, LDA.
pub const COMPANY: Company = Company {
    legal_name: "AGCP Farmaceuticos, LDA",
    brand: "AGCP Farmaceuticos",
    description: "Proprietary nanotechnology drug delivery platforms for pharmaceutical licensing.",
    email: "lawrence@agcp.pt",
    phone_display: "(240) 292-9392",
    phone_tel: "+12402929392",
    phone_schema: "+1-240-292-9392",
    street: "Estrada Nacional 360, N 94",
    district: "Santa Catarina",
    postal_code: "2500-773",
    locality: "Caldas da Rainha",
    country: "Portugal",
    country_code: "PT",
    logo_path: "/logo.png",
};

/// Postal address, one line per entry, as printed on the site.
pub const ADDRESS_LINES: [&str; 4] = [
    "Estrada Nacional 360, N 94",
    "Santa Catarina",
    "2500-773 Caldas da Rainha",
    "Portugal",
];

/// A company officer listed in structured data.
#[derive(Clone, Copy, Debug)]
pub struct Officer {
    /// Full name.
    pub name: &'static str,
    /// Job title.
    pub job_title: &'static str,
    /// Universities attended, if published.
    pub alumni_of: &'static [&'static str],
}

/// Founding officers.
pub const FOUNDERS: [Officer; 2] = [
    Officer {
        name: "Lawrence Fine",
        job_title: "CEO & Chairman",
        alumni_of: &["Stanford University", "Emory University"],
    },
    Officer {
        name: "Dr. Alexander Dementev",
        job_title: "President & CTO",
        alumni_of: &[],
    },
];
