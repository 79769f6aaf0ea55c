// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::config::CONTACT_SENDING_OPACITY;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action button (hero buttons).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_primary)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_secondary,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.brand_secondary)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_primary,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_400)),
            text_color: palette::GRAY_200,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined secondary button.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let hovered = matches!(status, button::Status::Hovered);

    button::Style {
        background: hovered.then_some(Background::Color(colors.brand_primary)),
        text_color: if hovered { WHITE } else { colors.brand_primary },
        border: Border {
            color: colors.brand_primary,
            width: 2.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar link; the active section's link is drawn in the brand color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = if active || matches!(status, button::Status::Hovered) {
            colors.brand_primary
        } else {
            colors.text_secondary
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    colors.brand_primary
                } else {
                    Color::TRANSPARENT
                },
                width: if active { 2.0 } else { 0.0 },
                radius: radius::NONE.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Flat icon-like button (hamburger, theme toggle, toast dismiss).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    button::Style {
        background: matches!(status, button::Status::Hovered)
            .then_some(Background::Color(colors.surface_tertiary)),
        text_color: colors.text_primary,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round buttons drawn over the lightbox (previous, next, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OPAQUE,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Visual state of the contact form's submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLook {
    Idle,
    Sending,
    Sent,
}

/// Contact form submit button. Sending dims the button; Sent paints it in
/// the success color. Both are disabled, so the look is applied regardless
/// of status.
pub fn submit(look: SubmitLook) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);

        let background = match look {
            SubmitLook::Idle if matches!(status, button::Status::Hovered) => {
                colors.brand_secondary
            }
            SubmitLook::Idle => colors.brand_primary,
            SubmitLook::Sending => Color {
                a: CONTACT_SENDING_OPACITY,
                ..colors.brand_primary
            },
            SubmitLook::Sent => colors.success,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: if look == SubmitLook::Idle {
                shadow::SM
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}
