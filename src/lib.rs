// SPDX-License-Identifier: MPL-2.0
//! `event_registration` is a small event registration client built with the
//! Iced GUI framework.
//!
//! A demo sign-in form validates one in-memory account, shows a success
//! message, and switches to a list of upcoming events a second later. Each
//! event has a details panel with a local register/unregister toggle.
//!
//! # Layout
//!
//! - [`domain`] - Pure rules: credential validation, session flag, event seed
//! - [`ui`] - Screen components, styles, accessibility identifiers
//! - [`app`] - Root state, scheduler, message routing
//! - [`config`], [`i18n`], [`diagnostics`], [`error`] - Ambient services

#![doc(html_root_url = "https://docs.rs/event_registration/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
