// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner without
//! blocking interaction.
//!
//! - [`notification`] - `Notification` with its severity level
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - rendering
//!
//! Durations: 3s for info, 5s for warnings, manual dismiss for errors. At
//! most three toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
