// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sign-in form and the
//! events screen.
//!
//! The `App` struct owns the session flag, the two screen components, the
//! scheduler that delays the post-login switch, and the toast manager. The
//! displayed screen is always derived from the session, so there is a single
//! place where signing in takes effect: the tick that fires the scheduled
//! transition.

mod message;
pub mod paths;
pub mod scheduler;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::SIGNED_OUT_KEY;

use crate::config::{self, Config};
use crate::diagnostics::{ActivityLog, DiagnosticEventKind};
use crate::domain::events;
use crate::domain::session::SessionState;
use crate::i18n::fluent::I18n;
use crate::ui::events_list;
use crate::ui::login;
use crate::ui::notifications::{self, Notification};
use chrono::Local;
use iced::{window, Element, Subscription, Task, Theme};
use scheduler::Scheduler;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    /// Resolved once at startup; `System` queries the desktop.
    theme: Theme,
    session: SessionState,
    login: login::State,
    events: events_list::State,
    scheduler: Scheduler,
    notifications: notifications::Manager,
    activity: ActivityLog,
}

const RECENT_ACTIVITY_IN_DEBUG: usize = 5;

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen())
            .field("pending_tasks", &self.scheduler.has_pending())
            .field("recent_activity", &self.activity.recent(RECENT_ACTIVITY_IN_DEBUG))
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());

    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads `settings.toml` and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags.lang, &config, config_warning, Instant::now());
        (app, Task::none())
    }

    /// Builds the initial state from an already loaded configuration.
    ///
    /// A config warning becomes both a toast and an activity entry.
    pub fn with_config(
        lang: Option<String>,
        config: &Config,
        config_warning: Option<String>,
        now: Instant,
    ) -> Self {
        let mut app = Self {
            i18n: I18n::new(lang, config),
            theme: config.general.theme_mode.theme(),
            session: SessionState::new(),
            login: login::State::new(),
            events: events_list::State::new(events::seed(Local::now())),
            scheduler: Scheduler::new(),
            notifications: notifications::Manager::new(),
            activity: ActivityLog::new(config.diagnostics.capacity())
                .with_stderr_echo(config.diagnostics.log_to_stderr),
        };

        app.activity.record_at(DiagnosticEventKind::AppStarted, now);

        if let Some(key) = config_warning {
            app.activity.record_at(
                DiagnosticEventKind::Warning {
                    message_key: key.clone(),
                },
                now,
            );
            app.notifications.push(Notification::warning(key, now));
        }

        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.scheduler.has_pending(),
            self.notifications.has_notifications(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now());
        Task::none()
    }

    /// Applies a message as if it arrived at `now`.
    ///
    /// `Tick` carries its own instant, which takes precedence.
    pub fn update_at(&mut self, message: Message, now: Instant) {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            login: &mut self.login,
            events: &mut self.events,
            scheduler: &mut self.scheduler,
            notifications: &mut self.notifications,
            activity: &mut self.activity,
        };

        match message {
            Message::Login(login_message) => {
                update::handle_login_message(&mut ctx, login_message, now);
            }
            Message::Events(events_message) => {
                update::handle_events_message(&mut ctx, events_message, now);
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message, now);
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen(),
            login: &self.login,
            events: &self.events,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        Screen::for_session(self.session)
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        self.session
    }

    #[must_use]
    pub fn login(&self) -> &login::State {
        &self.login
    }

    #[must_use]
    pub fn events(&self) -> &events_list::State {
        &self.events
    }

    /// Deadline of the earliest pending scheduled task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}
