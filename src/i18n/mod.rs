// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! All UI labels are looked up by key in a Fluent catalog embedded in the
//! binary. Only `en-US` ships; the lookup layer still resolves the locale
//! from the CLI, the config file, and the OS so that a catalog added under
//! `assets/i18n/` is picked up without code changes.
//!
//! Login error messages are deliberately not part of the catalog; see
//! [`LoginOutcome::error_message`](crate::domain::auth::LoginOutcome::error_message).

pub mod fluent;
