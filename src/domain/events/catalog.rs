// SPDX-License-Identifier: MPL-2.0
//! In-memory event catalog.
//!
//! The list is fixed at build time; only the start dates depend on when the
//! catalog is created (one event per day, starting tomorrow).

use chrono::{DateTime, Duration, Local};
use std::fmt;

/// Identifier of an event in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(u32);

impl EventId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A display-only event entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub starts_at: DateTime<Local>,
    /// Thumbnail location. Not fetched; the list draws a placeholder.
    pub image_url: Option<String>,
}

impl Event {
    /// Formats the start date as an abbreviated date with a short time,
    /// e.g. `Oct 20, 2026, 9:41 AM`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.starts_at.format("%b %-d, %Y, %-I:%M %p").to_string()
    }
}

/// (title, description, image) for each seeded event, in display order.
const SEED: [(&str, &str, &str); 5] = [
    (
        "SwiftUI Workshop",
        "Learn the latest in SwiftUI.",
        "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg",
    ),
    (
        "iOS Conference",
        "Meet professionals and enthusiasts.",
        "https://images.pexels.com/photos/3184298/pexels-photo-3184298.jpeg",
    ),
    (
        "Tech Meetup",
        "Networking and more.",
        "https://images.pexels.com/photos/1707828/pexels-photo-1707828.jpeg",
    ),
    (
        "Networking Night",
        "Make valuable connections.",
        "https://images.pexels.com/photos/1181406/pexels-photo-1181406.jpeg",
    ),
    (
        "App Launch",
        "Celebrate the new release.",
        "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg",
    ),
];

/// Builds the seed list relative to `now`.
///
/// Event `n` (1-based) starts `n * 24` hours after `now`. Ids are assigned in
/// display order starting at 1.
#[must_use]
pub fn seed(now: DateTime<Local>) -> Vec<Event> {
    SEED.iter()
        .zip(1u32..)
        .map(|(&(title, description, image_url), n)| Event {
            id: EventId::new(n),
            title: title.to_string(),
            description: description.to_string(),
            starts_at: now + Duration::hours(24 * i64::from(n)),
            image_url: Some(image_url.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 19, 9, 41, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn seed_has_five_events_with_unique_ids() {
        let events = seed(fixed_now());
        assert_eq!(events.len(), 5);

        let mut ids: Vec<_> = events.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn seed_dates_are_one_day_apart() {
        let now = fixed_now();
        let events = seed(now);
        for (index, event) in events.iter().enumerate() {
            let expected = now + Duration::hours(24 * (index as i64 + 1));
            assert_eq!(event.starts_at, expected);
        }
    }

    #[test]
    fn seed_keeps_display_order() {
        let titles: Vec<_> = seed(fixed_now()).into_iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            [
                "SwiftUI Workshop",
                "iOS Conference",
                "Tech Meetup",
                "Networking Night",
                "App Launch"
            ]
        );
    }

    #[test]
    fn formatted_date_uses_abbreviated_month_and_short_time() {
        let event = seed(fixed_now()).remove(0);
        assert_eq!(event.formatted_date(), "Oct 20, 2026, 9:41 AM");
    }
}
