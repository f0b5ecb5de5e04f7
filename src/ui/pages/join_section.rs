// SPDX-License-Identifier: MPL-2.0
//! Home-page invitation to the join form.

use crate::app::Route;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(i18n: &I18n) -> Element<'a, Route> {
    let join_now = button(Text::new(i18n.tr("join-now-button")).size(typography::BODY_LG))
        .on_press(Route::JoinForm)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(content::JOIN_TITLE).size(typography::TITLE_LG))
        .push(
            Text::new(content::JOIN_BLURB)
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        )
        .push(join_now);

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::section_alt)
        .into()
}
