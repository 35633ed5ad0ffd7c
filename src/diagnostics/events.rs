// SPDX-License-Identifier: MPL-2.0
//! Activity entries recorded by the client.
//!
//! Entries describe navigation and registration activity only. Sign-in
//! attempts, their outcomes, and anything typed into the login form are
//! never turned into an entry.

use crate::domain::events::EventId;
use std::time::Instant;

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// The application finished booting.
    AppStarted,

    /// A problem that did not stop the application (e.g. unreadable config).
    Warning {
        /// i18n key of the warning shown to the user.
        message_key: String,
    },

    /// The displayed screen changed. Screens are recorded by name.
    ScreenChanged {
        from: &'static str,
        to: &'static str,
    },

    /// The session was opened by a delayed sign-in transition.
    SessionStarted,

    /// The user left the event list.
    SessionEnded,

    /// The detail panel of an event was opened.
    EventDetailsOpened { event_id: EventId },

    /// A registration was toggled.
    RegistrationToggled { event_id: EventId, registered: bool },
}
