// SPDX-License-Identifier: MPL-2.0
//! Events screen: the seeded list, a details panel, and the per-event
//! registration toggle.
//!
//! Registrations live only in this component's state and are lost when the
//! user goes back to the sign-in form.

mod view;

pub use view::ViewContext;

use crate::domain::events::{self as catalog, EventId, Registrations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ShowDetails(EventId),
    CloseDetails,
    ToggleRegistration(EventId),
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user asked to leave the events screen.
    Back,
    DetailsOpened(EventId),
    RegistrationToggled { event_id: EventId, registered: bool },
}

#[derive(Debug, Clone)]
pub struct State {
    events: Vec<catalog::Event>,
    registrations: Registrations,
    selected: Option<EventId>,
    show_registration_message: bool,
}

impl State {
    #[must_use]
    pub fn new(events: Vec<catalog::Event>) -> Self {
        Self {
            events,
            registrations: Registrations::new(),
            selected: None,
            show_registration_message: false,
        }
    }

    #[must_use]
    pub fn events(&self) -> &[catalog::Event] {
        &self.events
    }

    #[must_use]
    pub fn registrations(&self) -> &Registrations {
        &self.registrations
    }

    #[must_use]
    pub fn is_registered(&self, id: EventId) -> bool {
        self.registrations.contains(id)
    }

    /// The event whose details panel is open.
    #[must_use]
    pub fn selected(&self) -> Option<&catalog::Event> {
        let id = self.selected?;
        self.events.iter().find(|event| event.id == id)
    }

    /// The confirmation line shows only while the open event is registered
    /// and the user registered it since the panel was opened.
    #[must_use]
    pub fn confirmation_visible(&self) -> bool {
        self.show_registration_message
            && self.selected.is_some_and(|id| self.registrations.contains(id))
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ShowDetails(id) => {
                if !self.events.iter().any(|event| event.id == id) {
                    return Event::None;
                }
                self.selected = Some(id);
                self.show_registration_message = false;
                Event::DetailsOpened(id)
            }
            Message::CloseDetails => {
                self.selected = None;
                self.show_registration_message = false;
                Event::None
            }
            Message::ToggleRegistration(id) => {
                let registered = self.registrations.toggle(id);
                if registered {
                    self.show_registration_message = true;
                }
                Event::RegistrationToggled {
                    event_id: id,
                    registered,
                }
            }
            Message::Back => Event::Back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn state() -> State {
        let now = Local
            .with_ymd_and_hms(2026, 10, 19, 9, 41, 0)
            .single()
            .expect("valid local time");
        State::new(catalog::seed(now))
    }

    #[test]
    fn starts_with_seed_and_nothing_open() {
        let state = state();
        assert_eq!(state.events().len(), 5);
        assert!(state.selected().is_none());
        assert!(state.registrations().is_empty());
    }

    #[test]
    fn show_details_opens_known_event() {
        let mut state = state();
        let id = EventId::new(2);

        assert_eq!(state.update(Message::ShowDetails(id)), Event::DetailsOpened(id));
        assert_eq!(state.selected().map(|event| event.title.as_str()), Some("iOS Conference"));
    }

    #[test]
    fn show_details_ignores_unknown_event() {
        let mut state = state();
        assert_eq!(state.update(Message::ShowDetails(EventId::new(42))), Event::None);
        assert!(state.selected().is_none());
    }

    #[test]
    fn toggling_twice_returns_to_unregistered() {
        let mut state = state();
        let id = EventId::new(1);
        state.update(Message::ShowDetails(id));

        assert_eq!(
            state.update(Message::ToggleRegistration(id)),
            Event::RegistrationToggled {
                event_id: id,
                registered: true
            }
        );
        assert!(state.confirmation_visible());

        assert_eq!(
            state.update(Message::ToggleRegistration(id)),
            Event::RegistrationToggled {
                event_id: id,
                registered: false
            }
        );
        assert!(!state.is_registered(id));
        assert!(!state.confirmation_visible());
    }

    #[test]
    fn closing_details_clears_confirmation() {
        let mut state = state();
        let id = EventId::new(3);
        state.update(Message::ShowDetails(id));
        state.update(Message::ToggleRegistration(id));

        state.update(Message::CloseDetails);
        assert!(!state.confirmation_visible());

        // Registration survives; the confirmation does not come back on reopen.
        state.update(Message::ShowDetails(id));
        assert!(state.is_registered(id));
        assert!(!state.confirmation_visible());
    }

    #[test]
    fn registrations_are_independent_per_event() {
        let mut state = state();
        state.update(Message::ToggleRegistration(EventId::new(1)));
        state.update(Message::ToggleRegistration(EventId::new(4)));

        assert!(state.is_registered(EventId::new(1)));
        assert!(!state.is_registered(EventId::new(2)));
        assert!(state.is_registered(EventId::new(4)));
        assert_eq!(state.registrations().len(), 2);
    }

    #[test]
    fn back_is_forwarded() {
        let mut state = state();
        assert_eq!(state.update(Message::Back), Event::Back);
    }
}
