// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use event_registration::ui::accessibility::{EventsListingId, LoginId};
    use event_registration::ui::design_tokens::{palette, sizing, spacing};
    use event_registration::ui::styles::{button, container};
    use event_registration::ui::theming::ThemeMode;
    use iced::widget::button::Status;
    use iced::{Background, Theme};

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;
        for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
            let _ = button::primary(&theme, status);
            let _ = button::secondary(&theme, status);
            let _ = button::destructive(&theme, status);
            let _ = button::disabled(&theme, status);
        }
    }

    #[test]
    fn register_and_unregister_styles_differ() {
        let theme = Theme::Light;
        let register = button::primary(&theme, Status::Active);
        let unregister = button::destructive(&theme, Status::Active);
        assert_ne!(register.background, unregister.background);
        assert_eq!(
            unregister.background,
            Some(Background::Color(palette::ERROR_500))
        );
    }

    #[test]
    fn container_styles_follow_theme() {
        let light = container::card(&Theme::Light);
        let dark = container::card(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn layout_tokens_are_consistent() {
        assert!(sizing::THUMBNAIL > sizing::BUTTON_HEIGHT);
        assert!(sizing::FORM_MAX_WIDTH > sizing::TOAST_WIDTH);
        assert!(spacing::XL > spacing::LG);
    }

    #[test]
    fn explicit_theme_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn accessibility_ids_are_stable() {
        assert_eq!(LoginId::Username.as_str(), "login.authentication.username");
        assert_eq!(LoginId::Password.as_str(), "login.authentication.password");
        assert_eq!(LoginId::LoginButton.as_str(), "login.authentication.loginButton");
        assert_eq!(
            LoginId::SuccessMessage.as_str(),
            "login.authentication.successMessage"
        );
        assert_eq!(
            LoginId::ErrorMessage.as_str(),
            "login.authentication.errorMessage"
        );
        assert_eq!(EventsListingId::EventsList.as_str(), "events_list");
        assert_eq!(EventsListingId::MoreButton.as_str(), "more_button");
        assert_eq!(EventsListingId::RegisterButton.as_str(), "register_button");
        assert_eq!(
            EventsListingId::RegistrationMessage.as_str(),
            "registration_message"
        );
    }
}
