// SPDX-License-Identifier: MPL-2.0
//! Page bodies shown under the navbar.
//!
//! Static sections ([`hero`], [`about`], [`join_section`], [`blog`],
//! [`footer`]) emit the [`Route`] to navigate to as their message. Form
//! pages own their form state and report to the app through [`Event`].

pub mod about;
pub mod blog;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod join_form;
pub mod join_section;
pub mod login;
pub mod signup;

use crate::app::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text_input, Column, Container, Text};
use iced::{alignment, Element, Length};

/// What a form page asks of the app after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    /// Valid submission; the payload is the i18n key of the success toast.
    Submitted(&'static str),
}

pub(crate) fn page_title<'a, M: 'a>(label: String) -> Element<'a, M> {
    Text::new(label).size(typography::TITLE_LG).into()
}

/// Label, input, and the field's error line when there is one.
pub(crate) fn labeled<'a, M: 'a>(
    i18n: &I18n,
    label_key: &str,
    control: impl Into<Element<'a, M>>,
    error: Option<&&'static str>,
) -> Element<'a, M> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(label_key)).size(typography::BODY))
        .push(control);
    if let Some(key) = error {
        column = column.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .style(styles::text::error),
        );
    }
    column.into()
}

/// Single-line text input with the shared form look.
pub(crate) fn input<'a, M: Clone + 'a>(
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> M + 'a,
) -> text_input::TextInput<'a, M> {
    text_input(placeholder, value)
        .on_input(on_input)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill)
}

/// Centered fixed-width card holding a form.
pub(crate) fn form_card<'a, M: 'a>(body: Column<'a, M>) -> Element<'a, M> {
    Container::new(
        Container::new(body.spacing(spacing::MD))
            .padding(spacing::XL)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .style(styles::container::card),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(alignment::Horizontal::Center)
    .into()
}
