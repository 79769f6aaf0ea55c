// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Theme, Vector};
    use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_folio::ui::styles::{button, container, text};
    use iced_folio::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, Status::Active);
        let _ = button::outline(&theme, Status::Hovered);
        let _ = button::ghost(&theme, Status::Pressed);
        let _ = button::nav_link(true)(&theme, Status::Active);
    }

    #[test]
    fn container_styles_follow_the_theme() {
        let light = container::page(&Theme::Light);
        let dark = container::page(&Theme::Dark);
        assert_ne!(light.background, dark.background);

        let _ = container::card(Vector::new(2.0, -1.0))(&Theme::Light);
        let _ = container::reveal_veil(0.5)(&Theme::Dark);
        let _ = text::muted(&Theme::Dark);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        assert!(sizing::CURSOR_RING_HOVER > sizing::CURSOR_RING);
        assert!(sizing::PROJECT_IMAGE_HEIGHT < sizing::PROJECT_CARD_HEIGHT);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surfaces and text invert between light and dark.
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
