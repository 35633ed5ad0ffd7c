// SPDX-License-Identifier: MPL-2.0
//! Events offered for registration.
//!
//! - [`catalog`]: the fixed seed list shown after sign-in
//! - [`registrations`]: the set of events the user toggled on

pub mod catalog;
pub mod registrations;

pub use catalog::{seed, Event, EventId};
pub use registrations::Registrations;
