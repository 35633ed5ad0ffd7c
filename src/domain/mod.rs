// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rules of the client with no UI dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `chrono` for event dates it only depends on `std`, which keeps
//! every rule testable without a window or a runtime.
//!
//! # Modules
//!
//! - [`auth`]: Credential validation ([`LoginOutcome`](auth::LoginOutcome),
//!   [`SessionGrant`](auth::SessionGrant))
//! - [`session`]: Signed-in / signed-out flag ([`SessionState`](session::SessionState))
//! - [`events`]: Event catalog and registrations ([`Event`](events::Event),
//!   [`Registrations`](events::Registrations))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod auth;
pub mod diagnostics;
pub mod events;
pub mod session;
