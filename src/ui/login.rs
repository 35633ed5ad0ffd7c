// SPDX-License-Identifier: MPL-2.0
//! Sign-in form.
//!
//! The component owns the transient form state (field values, inline error,
//! success flag) and turns validation outcomes into that state through
//! [`State::apply`]. It never touches the session: a successful submit
//! surfaces as [`Event::Authenticated`] and the application schedules the
//! screen switch.

use crate::domain::auth::{Credentials, LoginOutcome, SessionGrant};
use crate::i18n::fluent::I18n;
use crate::ui::accessibility::LoginId;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    None,
    /// Credentials were accepted; the grant opens the session.
    Authenticated(SessionGrant),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    credentials: Credentials,
    error_message: Option<&'static str>,
    is_login_success: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    #[must_use]
    pub fn is_login_success(&self) -> bool {
        self.is_login_success
    }

    /// Fields and submit are frozen once the success message is shown.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        !self.is_login_success
    }

    /// Submit is offered only when both fields hold something.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_editable() && self.credentials.is_complete()
    }

    pub fn update(&mut self, message: Message) -> Event {
        if !self.is_editable() {
            return Event::None;
        }

        match message {
            Message::UsernameChanged(value) => {
                self.credentials.username = value;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.credentials.password = value;
                Event::None
            }
            // A forced submit on empty fields still goes through validation.
            Message::Submit => match self.apply(self.credentials.validate()) {
                Some(grant) => Event::Authenticated(grant),
                None => Event::None,
            },
        }
    }

    /// Folds one validation outcome into the form state.
    ///
    /// Returns the session grant when the outcome is a success.
    pub fn apply(&mut self, outcome: LoginOutcome) -> Option<SessionGrant> {
        self.error_message = outcome.error_message();
        self.is_login_success = outcome.is_success();
        outcome.grant()
    }

    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let editable = self.is_editable();

        let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_LG);

        let username = text_input(
            &i18n.tr("login-username-placeholder"),
            &self.credentials.username,
        )
        .id(LoginId::Username.id())
        .on_input_maybe(editable.then_some(Message::UsernameChanged))
        .padding(spacing::XS)
        .size(typography::BODY_LG);

        let password = text_input(
            &i18n.tr("login-password-placeholder"),
            &self.credentials.password,
        )
        .id(LoginId::Password.id())
        .secure(true)
        .on_input_maybe(editable.then_some(Message::PasswordChanged))
        .on_submit_maybe(self.can_submit().then_some(Message::Submit))
        .padding(spacing::XS)
        .size(typography::BODY_LG);

        let submit = button(
            text(i18n.tr("login-submit-button"))
                .size(typography::BODY_LG)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary)
        .on_press_maybe(self.can_submit().then_some(Message::Submit));

        let mut form = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(title)
            .push(username)
            .push(password)
            .push(container(submit).id(LoginId::LoginButton.id()));

        if let Some(message) = self.error_message {
            form = form.push(
                container(text(message).size(typography::BODY))
                    .id(LoginId::ErrorMessage.id())
                    .style(styles::container::status(palette::ERROR_500)),
            );
        }

        if self.is_login_success {
            form = form.push(
                container(text(i18n.tr("login-success-message")).size(typography::BODY))
                    .id(LoginId::SuccessMessage.id())
                    .style(styles::container::status(palette::SUCCESS_500)),
            );
        }

        let card = Container::new(form)
            .max_width(sizing::FORM_MAX_WIDTH)
            .padding(spacing::XL)
            .style(styles::container::panel);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{EMPTY_FIELDS_MESSAGE, INVALID_CREDENTIALS_MESSAGE};

    fn filled(username: &str, password: &str) -> State {
        let mut state = State::new();
        state.update(Message::UsernameChanged(username.to_string()));
        state.update(Message::PasswordChanged(password.to_string()));
        state
    }

    #[test]
    fn empty_form_cannot_submit() {
        assert!(!State::new().can_submit());
    }

    #[test]
    fn forced_submit_on_empty_form_reports_empty_fields() {
        let mut state = State::new();
        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(state.error_message(), Some(EMPTY_FIELDS_MESSAGE));
        assert!(!state.is_login_success());
    }

    #[test]
    fn submit_requires_both_fields() {
        assert!(!filled("alice", "").can_submit());
        assert!(!filled("", "secret").can_submit());
        assert!(filled("alice", "secret").can_submit());
    }

    #[test]
    fn valid_credentials_emit_authenticated() {
        let mut state = filled("USER123", "1234");
        let event = state.update(Message::Submit);

        assert!(matches!(event, Event::Authenticated(_)));
        assert!(state.is_login_success());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn wrong_password_shows_invalid_credentials() {
        let mut state = filled("user123", "12345");
        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(state.error_message(), Some(INVALID_CREDENTIALS_MESSAGE));
        assert!(!state.is_login_success());
    }

    #[test]
    fn retry_after_failure_replaces_error() {
        let mut state = filled("alice", "nope");
        state.update(Message::Submit);
        assert_eq!(state.error_message(), Some(INVALID_CREDENTIALS_MESSAGE));

        state.update(Message::UsernameChanged("user123".into()));
        state.update(Message::PasswordChanged("1234".into()));
        assert!(matches!(state.update(Message::Submit), Event::Authenticated(_)));
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn form_is_frozen_after_success() {
        let mut state = filled("user123", "1234");
        state.update(Message::Submit);

        assert!(!state.can_submit());
        assert_eq!(state.update(Message::Submit), Event::None);
        state.update(Message::UsernameChanged("other".into()));
        assert_eq!(state.username(), "user123");
    }

    #[test]
    fn apply_failure_clears_success_flag() {
        let mut state = State::new();
        assert!(state.apply(LoginOutcome::Success).is_some());
        assert!(state.apply(LoginOutcome::InvalidCredentials).is_none());
        assert!(!state.is_login_success());
        assert_eq!(state.error_message(), Some(INVALID_CREDENTIALS_MESSAGE));
    }
}
