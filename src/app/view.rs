// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::events_list;
use crate::ui::login;
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub login: &'a login::State,
    pub events: &'a events_list::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => ctx
            .login
            .view(login::ViewContext { i18n: ctx.i18n })
            .map(Message::Login),
        Screen::Events => ctx
            .events
            .view(events_list::ViewContext { i18n: ctx.i18n })
            .map(Message::Events),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
        Stack::new().push(base).push(toasts).into()
    } else {
        base.into()
    }
}
