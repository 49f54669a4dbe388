//! Hardcoded client-side login check against a static user record.
//!
//! Not authentication in any real sense (an explicit non-goal): the
//! typed values are compared verbatim against the first record of
//! `user.json`, exactly as the source page did.

use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_USERNAME;

/// A static account record from `user.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserRecord {
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub password: String,
}

/// All configured accounts. Only the first record is ever checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UsersList(pub Vec<UserRecord>);

impl UsersList {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Parse the `user.json` document (a flat array of records).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<UserRecord>>(json).map(Self)
    }

    /// The record live checks run against.
    #[must_use]
    pub fn primary(&self) -> Option<&UserRecord> {
        self.0.first()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Live feedback for one credential input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CredentialStatus {
    /// Nothing typed yet: no feedback shown.
    #[default]
    Empty,
    Correct,
    Incorrect,
}

impl CredentialStatus {
    /// Compare a typed value against the stored one.
    #[must_use]
    pub fn check(expected: &str, typed: &str) -> Self {
        let typed = typed.trim();
        if typed.is_empty() {
            Self::Empty
        } else if typed == expected {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Login form state: per-field tri-state feedback plus the gate for
/// the login control.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginCheck {
    user: Option<UserRecord>,
    pub email: CredentialStatus,
    pub password: CredentialStatus,
}

impl LoginCheck {
    /// Bind the check to the primary user record. With no records the
    /// live checks never start, matching the source.
    #[must_use]
    pub fn new(users: &UsersList) -> Self {
        Self {
            user: users.primary().cloned(),
            email: CredentialStatus::Empty,
            password: CredentialStatus::Empty,
        }
    }

    pub fn edit_email(&mut self, typed: &str) {
        if let Some(user) = &self.user {
            self.email = CredentialStatus::check(&user.email, typed);
        }
    }

    pub fn edit_password(&mut self, typed: &str) {
        if let Some(user) = &self.user {
            self.password = CredentialStatus::check(&user.password, typed);
        }
    }

    /// The login control is enabled only when both credentials match.
    #[must_use]
    pub const fn can_login(&self) -> bool {
        self.email.is_correct() && self.password.is_correct()
    }

    /// Username recorded on successful login.
    #[must_use]
    pub fn username(&self) -> &str {
        match &self.user {
            Some(user) if !user.username.is_empty() => &user.username,
            _ => FALLBACK_USERNAME,
        }
    }
}

/// Signed-in snapshot persisted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthState {
    pub logged_in: bool,
    #[serde(default)]
    pub username: String,
}

impl AuthState {
    #[must_use]
    pub fn logged_in(username: &str) -> Self {
        Self {
            logged_in: true,
            username: username.to_string(),
        }
    }
}
