// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::design_tokens::palette;
use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

pub fn brand(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).brand_primary),
    }
}

/// Field-level validation message.
pub fn error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).error),
    }
}

pub fn star_lit(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::STAR_LIT),
    }
}

pub fn star_unlit(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).border),
    }
}
