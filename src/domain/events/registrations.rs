// SPDX-License-Identifier: MPL-2.0
//! Local registration state.
//!
//! Registrations live only as long as the event list they belong to. Nothing
//! is validated against the catalog and nothing leaves the process.

use super::EventId;
use std::collections::HashSet;

/// Set of events the user registered for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registrations {
    ids: HashSet<EventId>,
}

impl Registrations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.ids.contains(&id)
    }

    /// Flips the registration for `id` and returns the new state
    /// (`true` = registered).
    pub fn toggle(&mut self, id: EventId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
