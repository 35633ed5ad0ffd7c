// SPDX-License-Identifier: MPL-2.0
//! Signed-in / signed-out flag that decides which screen is shown.

use super::auth::SessionGrant;

/// Whether the user is currently signed in.
///
/// Signing in requires a [`SessionGrant`], which only a successful
/// validation produces. Signing out is the explicit "go back" action of the
/// event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    is_logged_in: bool,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_logged_in(self) -> bool {
        self.is_logged_in
    }

    /// Opens the session. Returns `true` if the state changed.
    pub fn sign_in(&mut self, _grant: SessionGrant) -> bool {
        let changed = !self.is_logged_in;
        self.is_logged_in = true;
        changed
    }

    /// Closes the session. Returns `true` if the state changed.
    pub fn sign_out(&mut self) -> bool {
        let changed = self.is_logged_in;
        self.is_logged_in = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{validate, LoginOutcome};

    #[test]
    fn starts_signed_out() {
        assert!(!SessionState::new().is_logged_in());
    }

    #[test]
    fn grant_from_success_signs_in() {
        let mut session = SessionState::new();
        let grant = validate("user123", "1234").grant().expect("success grants");
        assert!(session.sign_in(grant));
        assert!(session.is_logged_in());
    }

    #[test]
    fn second_sign_in_reports_no_change() {
        let mut session = SessionState::new();
        session.sign_in(LoginOutcome::Success.grant().unwrap());
        assert!(!session.sign_in(LoginOutcome::Success.grant().unwrap()));
        assert!(session.is_logged_in());
    }

    #[test]
    fn sign_out_returns_to_signed_out() {
        let mut session = SessionState::new();
        session.sign_in(LoginOutcome::Success.grant().unwrap());
        assert!(session.sign_out());
        assert!(!session.is_logged_in());
        assert!(!session.sign_out());
    }
}
