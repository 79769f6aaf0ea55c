// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Secondary copy (descriptions, subtitles).
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

/// Tertiary copy (periods, captions).
pub fn faint(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_tertiary),
    }
}

/// Brand-colored text (typewriter, stat numbers, section kicker).
pub fn brand(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).brand_primary),
    }
}

/// Text on the dark lightbox chrome.
pub fn overlay(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).overlay_text),
    }
}
