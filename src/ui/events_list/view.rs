// SPDX-License-Identifier: MPL-2.0
//! Rendering of the events screen.

use super::{Message, State};
use crate::domain::events as catalog;
use crate::i18n::fluent::I18n;
use crate::ui::accessibility::EventsListingId;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, container, opaque, scrollable, text, Column, Container, Row, Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Contextual data needed to render the events screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let back_button = button(text(format!("← {}", i18n.tr("events-back-button"))))
            .style(styles::button::secondary)
            .on_press(Message::Back);

        let header = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(back_button)
            .push(Text::new(i18n.tr("events-title")).size(typography::TITLE_LG));

        let rows = self
            .events()
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, event| {
                column.push(event_row(event, i18n))
            });

        let list = scrollable(rows)
            .id(EventsListingId::EventsList.id())
            .height(Length::Fill);

        let screen = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(header)
            .push(list);

        match self.selected() {
            Some(event) => Stack::new()
                .push(screen)
                .push(details_overlay(self, event, i18n))
                .into(),
            None => screen.into(),
        }
    }
}

fn event_row<'a>(event: &'a catalog::Event, i18n: &'a I18n) -> Element<'a, Message> {
    let secondary_text = |theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(&event.title).size(typography::TITLE_SM))
        .push(
            Text::new(&event.description)
                .size(typography::BODY)
                .style(secondary_text),
        )
        .push(
            Text::new(event.formatted_date())
                .size(typography::CAPTION)
                .style(secondary_text),
        );

    let more_button = button(text(i18n.tr("events-more-button")))
        .style(styles::button::secondary)
        .on_press(Message::ShowDetails(event.id));

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Top)
        .push(thumbnail_placeholder(i18n))
        .push(details)
        .push(container(more_button).id(EventsListingId::MoreButton.id()));

    Container::new(row)
        .id(EventsListingId::row_id(event.id))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

/// Thumbnails are not fetched; every row shows the same stand-in.
fn thumbnail_placeholder<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(text(i18n.tr("events-thumbnail-placeholder")).size(typography::CAPTION))
        .center_x(Length::Fixed(sizing::THUMBNAIL))
        .center_y(Length::Fixed(sizing::THUMBNAIL))
        .style(styles::container::thumbnail_placeholder)
        .into()
}

fn details_overlay<'a>(
    state: &'a State,
    event: &'a catalog::Event,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let registered = state.is_registered(event.id);

    let mut panel = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(&event.title).size(typography::TITLE_LG));

    if !event.description.is_empty() {
        panel = panel.push(Text::new(&event.description).size(typography::BODY_LG));
    }

    panel = panel.push(Text::new(event.formatted_date()).size(typography::TITLE_SM));

    let label = if registered {
        i18n.tr("events-unregister-button")
    } else {
        i18n.tr("events-register-button")
    };
    let style: fn(&Theme, button::Status) -> button::Style = if registered {
        styles::button::destructive
    } else {
        styles::button::primary
    };

    let register_button = button(
        text(label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(style)
    .on_press(Message::ToggleRegistration(event.id));

    panel = panel.push(container(register_button).id(EventsListingId::RegisterButton.id()));

    if state.confirmation_visible() {
        panel = panel.push(
            container(text(i18n.tr("events-registration-confirmation")).size(typography::BODY))
                .id(EventsListingId::RegistrationMessage.id())
                .style(styles::container::status(palette::SUCCESS_500)),
        );
    }

    panel = panel.push(
        button(text(i18n.tr("events-details-close-button")))
            .style(styles::button::secondary)
            .on_press(Message::CloseDetails),
    );

    let card = Container::new(panel)
        .width(Length::Fixed(sizing::DETAILS_PANEL_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::panel);

    opaque(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::scrim),
    )
}
