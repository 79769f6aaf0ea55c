// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternate section background, used on every other section.
pub fn section_alt(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Navbar bar. Once the page has scrolled, it turns into an opaque surface
/// with a shadow.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let base = colors.surface_primary;

        container::Style {
            background: Some(Background::Color(Color {
                a: if scrolled { opacity::SURFACE } else { opacity::TRANSPARENT },
                ..base
            })),
            text_color: Some(colors.text_primary),
            shadow: if scrolled { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Generic raised panel (dropdown menu, contact info, timeline entries).
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Project card. `lift` is the tilt-derived shadow offset.
pub fn card(lift: Vector) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let lifted = lift != Vector::ZERO;

        container::Style {
            background: Some(Background::Color(colors.surface_secondary)),
            text_color: Some(colors.text_primary),
            border: Border {
                radius: radius::LG.into(),
                color: if lifted {
                    colors.brand_primary
                } else {
                    Color::TRANSPARENT
                },
                width: 1.0,
            },
            shadow: if lifted {
                Shadow {
                    offset: lift,
                    ..shadow::LG
                }
            } else {
                shadow::SM
            },
            ..Default::default()
        }
    }
}

/// Placeholder drawn where a project image is missing.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.brand_primary
        })),
        text_color: Some(colors.brand_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tag chip.
pub fn tag(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.brand_primary
        })),
        text_color: Some(colors.brand_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the lightbox panel.
pub fn scrim(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        ..Default::default()
    }
}

/// Lightbox panel. `alpha` fades the panel during a content swap.
pub fn lightbox_panel(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..colors.surface_secondary
            })),
            text_color: Some(Color {
                a: alpha,
                ..colors.text_primary
            }),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: if alpha > 0.0 { shadow::LG } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Black frame behind the lightbox image.
pub fn image_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Skill bar track.
pub fn skill_track(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_tertiary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled part of a skill bar.
pub fn skill_fill(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Veil drawn over a section that has not finished revealing; `progress`
/// runs from 0 (fully veiled) to 1 (gone).
pub fn reveal_veil(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);

        container::Style {
            background: Some(Background::Color(Color {
                a: (1.0 - progress).clamp(0.0, 1.0),
                ..colors.surface_primary
            })),
            ..Default::default()
        }
    }
}
