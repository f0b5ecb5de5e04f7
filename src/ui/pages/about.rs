// SPDX-License-Identifier: MPL-2.0
//! "About us" section.

use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let body = content::ABOUT_PARAGRAPHS.iter().fold(
        Column::new()
            .spacing(spacing::MD)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(super::page_title(i18n.tr("about-title"))),
        |column, paragraph| column.push(Text::new(*paragraph).size(typography::BODY_LG)),
    );

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .into()
}
