// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the login form, event rows, and overlays.

pub mod button;
pub mod container;

pub use button::primary as button_primary;
