// SPDX-License-Identifier: MPL-2.0
//! Credential validation for the demo sign-in form.
//!
//! There is exactly one account, held in memory. Validation is a pure
//! function of the two field values and never fails: every input maps to a
//! [`LoginOutcome`].
//!
//! # Example
//!
//! ```
//! use event_registration::domain::auth::{validate, LoginOutcome};
//!
//! assert_eq!(validate("USER123", "1234"), LoginOutcome::Success);
//! assert_eq!(validate("user123", "12345"), LoginOutcome::InvalidCredentials);
//! assert_eq!(validate("", "1234"), LoginOutcome::EmptyFields);
//! ```

use std::fmt;

/// Username of the demo account, compared case-insensitively.
pub const DEMO_USERNAME: &str = "user123";

/// Password of the demo account, compared exactly.
pub const DEMO_PASSWORD: &str = "1234";

/// Message shown when either field is left empty.
pub const EMPTY_FIELDS_MESSAGE: &str = "Please enter both username and password.";

/// Message shown when the pair does not match the demo account.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";

/// Result of one validation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    EmptyFields,
    InvalidCredentials,
}

impl LoginOutcome {
    /// Returns the inline error text for failed outcomes.
    ///
    /// These strings are matched verbatim by UI checks and are therefore not
    /// routed through the translation catalog.
    #[must_use]
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            LoginOutcome::Success => None,
            LoginOutcome::EmptyFields => Some(EMPTY_FIELDS_MESSAGE),
            LoginOutcome::InvalidCredentials => Some(INVALID_CREDENTIALS_MESSAGE),
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == LoginOutcome::Success
    }

    /// Returns the grant that allows the session to be opened.
    ///
    /// Only a successful outcome yields one; this is the single way a
    /// [`SessionGrant`] can come into existence.
    #[must_use]
    pub fn grant(self) -> Option<SessionGrant> {
        self.is_success().then_some(SessionGrant { _private: () })
    }
}

/// Proof that a validation attempt succeeded.
///
/// Consumed by [`SessionState::sign_in`](crate::domain::session::SessionState::sign_in).
#[derive(Debug, PartialEq, Eq)]
pub struct SessionGrant {
    _private: (),
}

/// Username and password as typed in the form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns true when both fields hold at least one character.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    #[must_use]
    pub fn validate(&self) -> LoginOutcome {
        validate(&self.username, &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Checks a username/password pair against the demo account.
///
/// Emptiness is checked first, so an empty password never reports
/// [`LoginOutcome::InvalidCredentials`]. No whitespace trimming is applied.
#[must_use]
pub fn validate(username: &str, password: &str) -> LoginOutcome {
    if username.is_empty() || password.is_empty() {
        return LoginOutcome::EmptyFields;
    }

    if username.to_lowercase() == DEMO_USERNAME && password == DEMO_PASSWORD {
        LoginOutcome::Success
    } else {
        LoginOutcome::InvalidCredentials
    }
}
