// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Call-to-action button (Get Started, Join Now, Submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (colors.brand_primary, shadow::SM),
        button::Status::Hovered => (colors.brand_hover, shadow::MD),
        button::Status::Disabled => (colors.border, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

/// Outlined secondary action (Learn More).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: 0.12,
            ..colors.brand_primary
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.brand_primary,
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar link. The active route gets the brand color and an underline-like border.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = match (active, status) {
            (true, _) | (false, button::Status::Hovered) => colors.brand_primary,
            _ => colors.text_primary,
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
                width: if active { border::WIDTH_MD } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless icon button (theme toggle, menu, carousel arrows).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(colors.surface_secondary)), colors.text_primary)
        }
        button::Status::Active => (None, colors.text_primary),
        button::Status::Disabled => (None, Color { a: 0.35, ..colors.text_secondary }),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Service card acting as a toggle; the expanded card is outlined in brand color.
pub fn card(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered);

        button::Style {
            background: Some(Background::Color(colors.surface_raised)),
            text_color: colors.text_primary,
            border: Border {
                color: if selected || hovered {
                    colors.brand_primary
                } else {
                    colors.border
                },
                width: if selected {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::LG.into(),
            },
            shadow: if hovered || selected { shadow::MD } else { shadow::SM },
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().brand_primary))
        );
    }

    #[test]
    fn active_nav_link_is_highlighted() {
        let active = nav_link(true)(&Theme::Dark, button::Status::Active);
        let idle = nav_link(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.text_color, ColorScheme::dark().brand_primary);
        assert_ne!(active.text_color, idle.text_color);
        assert!(active.border.width > idle.border.width);
    }

    #[test]
    fn disabled_ghost_is_faded() {
        let enabled = ghost(&Theme::Light, button::Status::Active);
        let disabled = ghost(&Theme::Light, button::Status::Disabled);
        assert!(disabled.text_color.a < enabled.text_color.a);
    }

    #[test]
    fn selected_card_has_thicker_border() {
        let selected = card(true)(&Theme::Light, button::Status::Active);
        let idle = card(false)(&Theme::Light, button::Status::Active);
        assert!(selected.border.width > idle.border.width);
    }
}
