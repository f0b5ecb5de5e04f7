// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing step and size the site uses lives here.

## Organization

- **Palette**: Base colors (warm brand scale + grays)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use akanni::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
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
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.14, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.22, 0.26);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.96);

    // Brand colors (amber scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.98, 0.72, 0.3);
    pub const PRIMARY_500: Color = Color::from_rgb(0.95, 0.6, 0.1);
    pub const PRIMARY_600: Color = Color::from_rgb(0.85, 0.5, 0.05);
    pub const PRIMARY_700: Color = Color::from_rgb(0.7, 0.4, 0.03);

    // Accent (deep teal, hero and footer backgrounds)
    pub const ACCENT_700: Color = Color::from_rgb(0.05, 0.3, 0.33);
    pub const ACCENT_900: Color = Color::from_rgb(0.02, 0.16, 0.18);

    // Star glyphs
    pub const STAR_LIT: Color = Color::from_rgb(1.0, 0.76, 0.03);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and toasts
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Below this window width the navbar collapses into a menu button.
    pub const MOBILE_BREAKPOINT: f32 = 820.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const FORM_WIDTH: f32 = 460.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    pub const SERVICE_CARD_HEIGHT: f32 = 200.0;
    pub const TESTIMONIAL_CARD_WIDTH: f32 = 640.0;
    pub const TESTIMONIAL_MEDIA_HEIGHT: f32 = 220.0;
    pub const PROGRESS_TRACK: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero headline
    //! - Titles: page and section headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Hero headline
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Section headings, brand name
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Hero tagline, testimonial quote
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Field errors, bylines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Cards, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Active nav link, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::FORM_WIDTH < sizing::CONTENT_MAX_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_scale_darkens() {
        assert!(palette::PRIMARY_400.g > palette::PRIMARY_500.g);
        assert!(palette::PRIMARY_500.g > palette::PRIMARY_600.g);
    }
}
