use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::Profile;

/// Profile fields that carry a format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Phone,
    Email,
    Website,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Website => "website",
        }
    }
}

/// Outcome of validating a profile snapshot. Collects every violation so
/// all broken fields can be reported at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub field_errors: BTreeMap<Field, String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}

/// Validate a profile. Pure: no side effects, no failure paths. Empty
/// fields are always valid; each rule only applies to non-empty input.
pub fn validate(profile: &Profile) -> Validation {
    let mut field_errors = BTreeMap::new();

    if !profile.email.is_empty() && !is_valid_email(&profile.email) {
        field_errors.insert(
            Field::Email,
            "Please enter a valid email address".to_string(),
        );
    }

    if !profile.website.is_empty() && !website_pattern().is_match(&profile.website) {
        field_errors.insert(
            Field::Website,
            "Please enter a valid website URL".to_string(),
        );
    }

    if !profile.phone.is_empty() && !phone_pattern().is_match(&profile.phone) {
        field_errors.insert(
            Field::Phone,
            "Please enter a valid phone number".to_string(),
        );
    }

    Validation { field_errors }
}

/// Validate email format: exactly one `@`, a non-empty local part, and a
/// domain containing a dot.
pub fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }
    let (local, domain) = (parts[0], parts[1]);
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

/// Optional scheme and www, one or more dot-separated labels, a final
/// label of at least two letters, then an optional path.
fn website_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(https?://)?(www\.)?([A-Za-z0-9-]+\.)+[A-Za-z]{2,}([/\w-]*)*/?$")
            .expect("website pattern compiles")
    })
}

/// Optional leading `+`, then digits and the separators `( ) - . /` and
/// space, in any interior position.
fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9()\-\s./]+$").expect("phone pattern compiles"))
}
