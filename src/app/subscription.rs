// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks only while something is waiting on time: a scheduled transition or
/// a visible toast.
pub fn create_tick_subscription(
    has_pending_task: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if has_pending_task || has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
