// SPDX-License-Identifier: MPL-2.0
//! Site footer: studio blurb, quick links, contact details, copyright.

use crate::app::Route;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

const QUICK_LINKS: [Route; 4] = [Route::Home, Route::About, Route::Services, Route::Contact];

pub fn view<'a>(i18n: &I18n, year: i32) -> Element<'a, Route> {
    let studio = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(2))
        .push(
            Text::new(content::STUDIO_NAME)
                .size(typography::TITLE_MD)
                .style(styles::text::brand),
        )
        .push(Text::new(content::FOOTER_TAGLINE).size(typography::BODY))
        .push(Text::new(content::FOOTER_MOTTO).size(typography::CAPTION));

    let links = QUICK_LINKS.into_iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .width(Length::FillPortion(1))
            .push(Text::new(i18n.tr("footer-quick-links")).size(typography::TITLE_SM)),
        |column, route| {
            column.push(
                button(Text::new(i18n.tr(route.label_key())).size(typography::BODY))
                    .on_press(route)
                    .padding(0)
                    .style(styles::button::ghost),
            )
        },
    );

    let contact = Column::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .push(Text::new(i18n.tr("footer-contact")).size(typography::TITLE_SM))
        .push(Text::new(content::CONTACT_ADDRESS).size(typography::BODY))
        .push(Text::new(content::CONTACT_PHONE).size(typography::BODY))
        .push(Text::new(content::CONTACT_EMAIL).size(typography::BODY));

    let year = year.to_string();
    let copyright = Text::new(i18n.tr_with_args("footer-copyright", &[("year", year.as_str())]))
        .size(typography::CAPTION);

    let column = Column::new()
        .spacing(spacing::LG)
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(studio)
                .push(links)
                .push(contact),
        )
        .push(
            Container::new(copyright)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .style(styles::container::band)
        .into()
}
