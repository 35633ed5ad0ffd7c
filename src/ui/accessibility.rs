// SPDX-License-Identifier: MPL-2.0
//! Stable identifiers attached to the interactive and status elements.
//!
//! UI automation locates elements by these strings, so they must not change
//! between releases. Each id is bound to its widget with `.id(..)`; buttons
//! are wrapped in an identified container.
//!
//! Every event row shares the `more_button` id. To reach the button of one
//! event, locate its row by [`EventsListingId::row_id`] (`events_list.row.<id>`)
//! and then the `more_button` inside it.

use crate::domain::events::EventId;
use iced::widget::Id;

/// Elements of the sign-in screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginId {
    Username,
    Password,
    LoginButton,
    SuccessMessage,
    ErrorMessage,
}

impl LoginId {
    pub const ALL: [LoginId; 5] = [
        LoginId::Username,
        LoginId::Password,
        LoginId::LoginButton,
        LoginId::SuccessMessage,
        LoginId::ErrorMessage,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LoginId::Username => "login.authentication.username",
            LoginId::Password => "login.authentication.password",
            LoginId::LoginButton => "login.authentication.loginButton",
            LoginId::SuccessMessage => "login.authentication.successMessage",
            LoginId::ErrorMessage => "login.authentication.errorMessage",
        }
    }

    /// Human-readable label for assistive tooling.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            LoginId::Username => "Username text field",
            LoginId::Password => "Password secure text field",
            LoginId::LoginButton => "Login button",
            LoginId::SuccessMessage => "Login success message",
            LoginId::ErrorMessage => "Login error message",
        }
    }

    #[must_use]
    pub fn id(self) -> Id {
        Id::new(self.as_str())
    }
}

/// Elements of the events screen.
///
/// `MoreButton` and `RegisterButton` are shared: every row carries the same
/// "more" id, and the single register button lives in the details panel.
/// Rows themselves are addressed per event with [`EventsListingId::row_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventsListingId {
    EventsList,
    MoreButton,
    RegisterButton,
    RegistrationMessage,
}

impl EventsListingId {
    pub const ALL: [EventsListingId; 4] = [
        EventsListingId::EventsList,
        EventsListingId::MoreButton,
        EventsListingId::RegisterButton,
        EventsListingId::RegistrationMessage,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventsListingId::EventsList => "events_list",
            EventsListingId::MoreButton => "more_button",
            EventsListingId::RegisterButton => "register_button",
            EventsListingId::RegistrationMessage => "registration_message",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            EventsListingId::EventsList => "List of upcoming events",
            EventsListingId::MoreButton => "Show event details",
            EventsListingId::RegisterButton => "Register or unregister for the event",
            EventsListingId::RegistrationMessage => "Registration confirmation message",
        }
    }

    #[must_use]
    pub fn id(self) -> Id {
        Id::new(self.as_str())
    }

    /// String id of the row showing `event`.
    #[must_use]
    pub fn row_str(event: EventId) -> String {
        format!("{}.row.{}", EventsListingId::EventsList.as_str(), event.value())
    }

    #[must_use]
    pub fn row_id(event: EventId) -> Id {
        Id::from(Self::row_str(event))
    }
}
