// SPDX-License-Identifier: MPL-2.0
//! Blog placeholder: titles and summaries, no article pages yet.

use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let posts = content::BLOG_POSTS.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, (title, summary)| {
            column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(Text::new(*title).size(typography::TITLE_SM))
                        .push(
                            Text::new(*summary)
                                .size(typography::BODY)
                                .style(styles::text::secondary),
                        ),
                )
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::card),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(super::page_title(i18n.tr("blog-title")))
        .push(
            Text::new(i18n.tr("blog-coming-soon"))
                .size(typography::BODY)
                .style(styles::text::secondary),
        )
        .push(posts);

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .into()
}
