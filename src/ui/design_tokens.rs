// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and font scale used by the portfolio views.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and page section sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Scrim behind the lightbox
let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

Section heights in [`sizing`] are authoritative: the page layout uses them
to compute where each section sits, and the views render sections at
exactly those heights.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.08, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.12, 0.13, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.31, 0.36);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.47, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.79, 0.83);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.96);

    // Brand colors (violet scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.58, 0.5, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.42, 0.33, 0.93);
    pub const PRIMARY_600: Color = Color::from_rgb(0.35, 0.25, 0.82);

    // Accent (cursor ring, highlights)
    pub const ACCENT_400: Color = Color::from_rgb(0.93, 0.38, 0.67);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    /// Submit button after a successful send (#10b981).
    pub const SUCCESS_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar background once the page has scrolled.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Element heights
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const NAVBAR_HEIGHT: f32 = 72.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const LIGHTBOX_MAX_WIDTH: f32 = 960.0;

    // Page sections
    pub const HERO_MIN_HEIGHT: f32 = 560.0;
    /// Title and subtitle block at the top of each section.
    pub const SECTION_HEADER_HEIGHT: f32 = 140.0;
    /// Bottom padding of each section.
    pub const SECTION_PADDING: f32 = 64.0;
    pub const ABOUT_BODY_HEIGHT: f32 = 220.0;
    pub const STATS_ROW_HEIGHT: f32 = 140.0;
    pub const SKILL_ROW_HEIGHT: f32 = 64.0;
    pub const PROJECT_CARD_MIN_WIDTH: f32 = 300.0;
    pub const PROJECT_CARD_HEIGHT: f32 = 340.0;
    pub const PROJECT_IMAGE_HEIGHT: f32 = 220.0;
    pub const TIMELINE_ENTRY_HEIGHT: f32 = 132.0;
    pub const CONTACT_BODY_HEIGHT: f32 = 520.0;
    pub const MESSAGE_INPUT_HEIGHT: f32 = 140.0;

    // Skill bar track
    pub const SKILL_BAR_HEIGHT: f32 = 8.0;

    // Custom cursor
    pub const CURSOR_RING: f32 = 36.0;
    pub const CURSOR_RING_HOVER: f32 = 56.0;
    pub const CURSOR_DOT: f32 = 8.0;
    pub const CURSOR_TRAIL: f32 = 6.0;

    // Spinner on the submit button
    pub const SPINNER: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero name
    //! - Titles: section and card headings
    //! - Body: primary content text
    //! - Caption: tags, periods, small info

    /// Hero headline.
    pub const DISPLAY: f32 = 56.0;

    /// Typewriter tagline.
    pub const DISPLAY_SM: f32 = 32.0;

    /// Section titles.
    pub const TITLE_LG: f32 = 30.0;

    /// Stat numbers, lightbox title.
    pub const TITLE_MD: f32 = 22.0;

    /// Card titles, brand label.
    pub const TITLE_SM: f32 = 18.0;

    /// Form inputs, emphasis text.
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text.
    pub const BODY: f32 = 14.0;

    /// Hints, secondary labels.
    pub const BODY_SM: f32 = 13.0;

    /// Tags, periods.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents, cursor ring
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 14.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XXXL > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::CURSOR_RING_HOVER > sizing::CURSOR_RING);
    assert!(sizing::CURSOR_RING > sizing::CURSOR_DOT);
    assert!(sizing::PROJECT_CARD_HEIGHT > sizing::PROJECT_IMAGE_HEIGHT);
    assert!(sizing::CONTACT_BODY_HEIGHT > sizing::MESSAGE_INPUT_HEIGHT);
    assert!(sizing::LIGHTBOX_MAX_WIDTH <= sizing::CONTENT_MAX_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::DISPLAY_SM);
    assert!(typography::DISPLAY_SM > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
