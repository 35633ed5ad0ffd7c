// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::domain::session::SessionState;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Events,
}

impl Screen {
    /// Stable lowercase name, used in the activity log.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Events => "events",
        }
    }

    /// The screen is a pure function of the session.
    #[must_use]
    pub fn for_session(session: SessionState) -> Self {
        if session.is_logged_in() {
            Screen::Events
        } else {
            Screen::Login
        }
    }
}
