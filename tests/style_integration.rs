// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use akanni::ui::design_tokens::{palette, sizing, spacing};
    use akanni::ui::styles::{button, container, text};
    use akanni::ui::theming::{ColorScheme, ThemeMode};
    use iced::widget::button::Status;
    use iced::Theme;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, Status::Active);
            let _ = button::secondary(&theme, Status::Hovered);
            let _ = button::ghost(&theme, Status::Pressed);
            let _ = button::nav_link(true)(&theme, Status::Active);
            let _ = button::card(false)(&theme, Status::Disabled);
            let _ = container::page(&theme);
            let _ = container::navbar(&theme);
            let _ = container::card(&theme);
            let _ = text::star_lit(&theme);
            let _ = text::star_unlit(&theme);
        }
    }

    #[test]
    fn lit_stars_stand_out_from_unlit_ones() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(text::star_lit(&theme).color, Some(palette::STAR_LIT));
            assert_ne!(text::star_unlit(&theme).color, Some(palette::STAR_LIT));
        }
    }

    #[test]
    fn theme_modes_map_to_matching_schemes() {
        assert_eq!(
            ColorScheme::for_theme(&ThemeMode::Dark.iced_theme()),
            ColorScheme::dark()
        );
        assert_eq!(
            ColorScheme::for_theme(&ThemeMode::Light.iced_theme()),
            ColorScheme::light()
        );
    }

    #[test]
    fn layout_tokens_fit_together() {
        assert!(sizing::FORM_WIDTH < sizing::MOBILE_BREAKPOINT);
        assert!(sizing::TESTIMONIAL_CARD_WIDTH <= sizing::CONTENT_MAX_WIDTH);
        assert!(spacing::XXS < spacing::XXL);
    }
}
