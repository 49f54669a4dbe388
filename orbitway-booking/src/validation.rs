//! Live per-field validation for passenger contact details.
//!
//! Each field is validated independently, first failing rule wins, and
//! each produces one of three display states so the readiness
//! aggregator can query them without re-deriving anything.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{EMAIL_PATTERN, NAME_PATTERN, PHONE_PATTERN};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(NAME_PATTERN).expect("name pattern is valid"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"));

/// The four editable fields on a passenger card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassengerField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl PassengerField {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Phone];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
        }
    }

    /// Phone is the only optional field.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }

    /// Positive feedback copy shown when the field validates.
    #[must_use]
    pub const fn ok_message(self) -> &'static str {
        match self {
            Self::Email => "Valid email",
            _ => "Looks good",
        }
    }
}

impl fmt::Display for PassengerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field is currently rejected. The `Display` text is the
/// feedback copy shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FieldError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Looks bad")]
    BadName,
    #[error("Invalid email format")]
    BadEmail,
    #[error("Invalid phone format")]
    BadPhone,
}

/// Display state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldStatus {
    /// Untouched, or an empty optional field: no feedback shown.
    #[default]
    Empty,
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub const fn error(self) -> Option<FieldError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Validate one field the way the live form does. Values are trimmed
/// first; an emptied required field reports its required error, an
/// empty phone stays `Empty`.
#[must_use]
pub fn validate_field(field: PassengerField, raw: &str) -> FieldStatus {
    let value = raw.trim();
    if value.is_empty() {
        return match field {
            PassengerField::FirstName => FieldStatus::Invalid(FieldError::FirstNameRequired),
            PassengerField::LastName => FieldStatus::Invalid(FieldError::LastNameRequired),
            PassengerField::Email => FieldStatus::Invalid(FieldError::EmailRequired),
            PassengerField::Phone => FieldStatus::Empty,
        };
    }
    match field {
        PassengerField::FirstName | PassengerField::LastName => {
            if NAME_RE.is_match(value) {
                FieldStatus::Valid
            } else {
                FieldStatus::Invalid(FieldError::BadName)
            }
        }
        PassengerField::Email => {
            if EMAIL_RE.is_match(value) {
                FieldStatus::Valid
            } else {
                FieldStatus::Invalid(FieldError::BadEmail)
            }
        }
        PassengerField::Phone => {
            if PHONE_RE.is_match(value) {
                FieldStatus::Valid
            } else {
                FieldStatus::Invalid(FieldError::BadPhone)
            }
        }
    }
}
