// SPDX-License-Identifier: MPL-2.0
//! Landing banner.

use crate::app::Route;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(i18n: &I18n) -> Element<'a, Route> {
    let call_to_action = button(Text::new(i18n.tr("hero-contact-button")).size(typography::BODY_LG))
        .on_press(Route::Contact)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(content::HERO_TITLE).size(typography::DISPLAY))
        .push(
            Text::new(content::HERO_TAGLINE)
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        )
        .push(call_to_action);

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL * 2.0, spacing::XL])
        .center_x(Length::Fill)
        .style(styles::container::band)
        .into()
}
