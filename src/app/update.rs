// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components reduce their own messages; the handlers here react to the
//! `Event`s they return by touching the state the application owns.

use super::scheduler::{ScheduledAction, Scheduler};
use super::Screen;
use crate::config::LOGIN_SUCCESS_DELAY;
use crate::diagnostics::{ActivityLog, DiagnosticEventKind};
use crate::domain::events;
use crate::domain::session::SessionState;
use crate::ui::events_list::{self, Event as EventsEvent};
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::notifications::{self, Notification};
use chrono::Local;
use std::time::Instant;

/// i18n key of the toast shown after leaving the events screen.
pub const SIGNED_OUT_KEY: &str = "notification-signed-out";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub session: &'a mut SessionState,
    pub login: &'a mut login::State,
    pub events: &'a mut events_list::State,
    pub scheduler: &'a mut Scheduler,
    pub notifications: &'a mut notifications::Manager,
    pub activity: &'a mut ActivityLog,
}

/// Forwards a form message; a successful submit schedules the session
/// transition instead of switching screens right away.
pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message, now: Instant) {
    match ctx.login.update(message) {
        LoginEvent::Authenticated(grant) => {
            ctx.scheduler.schedule(
                now,
                LOGIN_SUCCESS_DELAY,
                ScheduledAction::EnterSession(grant),
            );
        }
        LoginEvent::None => {}
    }
}

pub fn handle_events_message(
    ctx: &mut UpdateContext<'_>,
    message: events_list::Message,
    now: Instant,
) {
    match ctx.events.update(message) {
        EventsEvent::None => {}
        EventsEvent::Back => sign_out(ctx, now),
        EventsEvent::DetailsOpened(event_id) => {
            ctx.activity
                .record_at(DiagnosticEventKind::EventDetailsOpened { event_id }, now);
        }
        EventsEvent::RegistrationToggled {
            event_id,
            registered,
        } => {
            ctx.activity.record_at(
                DiagnosticEventKind::RegistrationToggled {
                    event_id,
                    registered,
                },
                now,
            );
        }
    }
}

/// Runs due scheduled actions, then expires toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    for action in ctx.scheduler.fire_due(now) {
        match action {
            ScheduledAction::EnterSession(grant) => {
                if ctx.session.sign_in(grant) {
                    ctx.activity
                        .record_at(DiagnosticEventKind::SessionStarted, now);
                    ctx.activity.record_at(
                        DiagnosticEventKind::ScreenChanged {
                            from: Screen::Login.name(),
                            to: Screen::Events.name(),
                        },
                        now,
                    );
                }
            }
        }
    }

    ctx.notifications.tick(now);
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
    now: Instant,
) {
    ctx.notifications.handle_message(message, now);
}

/// Closes the session and starts both screens over.
fn sign_out(ctx: &mut UpdateContext<'_>, now: Instant) {
    if !ctx.session.sign_out() {
        return;
    }

    *ctx.login = login::State::new();
    *ctx.events = events_list::State::new(events::seed(Local::now()));

    ctx.activity
        .record_at(DiagnosticEventKind::SessionEnded, now);
    ctx.activity.record_at(
        DiagnosticEventKind::ScreenChanged {
            from: Screen::Events.name(),
            to: Screen::Login.name(),
        },
        now,
    );
    ctx.notifications.push(Notification::info(SIGNED_OUT_KEY, now));
}
