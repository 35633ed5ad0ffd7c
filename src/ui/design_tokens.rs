// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the sign-in form, the events screen, and
//! toasts.
//!
//! Styles in [`crate::ui::styles`] and the views read from here; nothing
//! else hard-codes a color or a size. Spacing sits on a 4px grid.
//!
//! ```
//! use event_registration::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! assert!(backdrop.a < 1.0);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Button text on light backgrounds.
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// Disabled text and neutral borders.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// Disabled fill and thumbnail placeholder.
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Login and Register buttons, hover variant.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Login error line and Unregister button.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    /// Login success line and registration confirmation.
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    /// Hovered toast dismiss button.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Details backdrop and pressed dismiss button.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Sign-in card and details panel.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Square placeholder drawn where an event picture would be.
    pub const THUMBNAIL: f32 = 64.0;

    /// Maximum width of the sign-in card.
    pub const FORM_MAX_WIDTH: f32 = 420.0;
    pub const DETAILS_PANEL_WIDTH: f32 = 420.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    /// Column holding the severity glyph of a toast.
    pub const TOAST_MARKER: f32 = 24.0;
}

pub mod typography {
    /// Screen titles ("Sign In", "Events") and the details heading.
    pub const TITLE_LG: f32 = 30.0;
    /// Event title in a row, date in the details panel.
    pub const TITLE_SM: f32 = 18.0;
    /// Form fields and primary buttons.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Event date in a row, thumbnail label.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Event row outline.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const TINT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Floating surfaces: sign-in card, details panel.
    pub const LG: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(sizing::THUMBNAIL > sizing::BUTTON_HEIGHT);
    assert!(sizing::TOAST_WIDTH < sizing::FORM_MAX_WIDTH);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(opacity::SURFACE > opacity::OVERLAY_MEDIUM);
};
