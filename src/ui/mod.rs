// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, reduces its own `Message`s, and reports what the
//! application must react to as an `Event`.
//!
//! # Screens
//!
//! - [`login`] - Sign-in form
//! - [`events_list`] - Upcoming events, details panel, registration toggle
//!
//! # Shared Infrastructure
//!
//! - [`accessibility`] - Stable widget identifiers for UI automation
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`notifications`] - Toast notification system for user feedback

pub mod accessibility;
pub mod design_tokens;
pub mod events_list;
pub mod login;
pub mod notifications;
pub mod styles;
pub mod theming;
