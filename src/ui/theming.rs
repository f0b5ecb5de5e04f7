// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme handling.
//!
//! The chosen [`ThemeMode`] is owned by the application root and handed to
//! views; style functions derive their colors from the active Iced
//! [`Theme`] through [`ColorScheme::for_theme`].

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color roles used by the site's custom styles.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_raised: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_hover: Color,

    /// Hero band and footer.
    pub band_background: Color,
    pub band_text: Color,

    pub border: Color,
    pub error: Color,
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_raised: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_600,
            brand_hover: palette::PRIMARY_700,

            band_background: palette::ACCENT_700,
            band_text: palette::WHITE,

            border: palette::GRAY_200,
            error: palette::ERROR_500,
            scrim: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_raised: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_hover: palette::PRIMARY_500,

            band_background: palette::ACCENT_900,
            band_text: palette::GRAY_100,

            border: palette::GRAY_700,
            error: palette::ERROR_500,
            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching an Iced theme's brightness.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follows the OS preference, detected with `dark-light`.
    System,
}

impl ThemeMode {
    /// Effective darkness. `System` asks the OS and falls back to light.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Mode after pressing the navbar toggle: always an explicit light or dark.
    #[must_use]
    pub fn toggled(self) -> ThemeMode {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// i18n key for the toggle's accessible label.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        if self.is_dark() {
            "navbar-switch-to-light"
        } else {
            "navbar-switch-to-dark"
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }

    #[test]
    fn scheme_follows_iced_theme_brightness() {
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
    }

    #[test]
    fn toggle_flips_explicit_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        let from_system = ThemeMode::System.toggled();
        assert_ne!(from_system, ThemeMode::System);
        assert_ne!(from_system.is_dark(), ThemeMode::System.is_dark());
    }

    #[test]
    fn toggle_label_names_the_target_mode() {
        assert_eq!(ThemeMode::Dark.toggle_label_key(), "navbar-switch-to-light");
        assert_eq!(ThemeMode::Light.toggle_label_key(), "navbar-switch-to-dark");
    }

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(ThemeMode::default().iced_theme(), Theme::Light);
    }
}
