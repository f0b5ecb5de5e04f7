// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Brand on the left, route links and the theme toggle on the right. When
//! the window is narrow the links collapse behind a menu button and open as
//! a dropdown column; choosing a link closes it.

use crate::app::Route;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Route,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
    /// Narrow window: links go behind the menu button.
    pub compact: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleMenu,
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    ToggleTheme,
}

pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(route) => {
            *menu_open = false;
            Event::Navigate(route)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(content::STUDIO_NAME)
            .size(typography::TITLE_MD)
            .style(styles::text::brand),
    )
    .on_press(Message::Navigate(Route::Home))
    .padding(spacing::XXS)
    .style(styles::button::ghost);

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let glyph = if ctx.menu_open { "✕" } else { "☰" };
        let label = if ctx.menu_open {
            "navbar-menu-close"
        } else {
            "navbar-menu-open"
        };
        bar = bar.push(with_label(
            button(Text::new(glyph).size(typography::TITLE_SM))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost),
            ctx.i18n.tr(label),
        ));
    } else {
        for route in Route::NAV_LINKS {
            bar = bar.push(nav_link(ctx.i18n, route, ctx.current));
        }
    }
    bar = bar.push(theme_toggle(ctx.i18n, ctx.theme_mode));

    let top = Container::new(bar.padding([spacing::XS, spacing::LG]))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .center_y(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar);

    let mut column = Column::new().width(Length::Fill).push(top);
    if ctx.compact && ctx.menu_open {
        let dropdown = Route::NAV_LINKS.into_iter().fold(
            Column::new().spacing(spacing::XXS).padding(spacing::SM),
            |col, route| col.push(nav_link(ctx.i18n, route, ctx.current)),
        );
        column = column.push(
            Container::new(dropdown)
                .width(Length::Fill)
                .style(styles::container::navbar),
        );
    }
    column.into()
}

fn nav_link<'a>(i18n: &I18n, route: Route, current: Route) -> Element<'a, Message> {
    button(Text::new(i18n.tr(route.label_key())).size(typography::BODY))
        .on_press(Message::Navigate(route))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(route == current))
        .into()
}

fn theme_toggle<'a>(i18n: &I18n, mode: ThemeMode) -> Element<'a, Message> {
    let glyph = if mode.is_dark() { "☀" } else { "☾" };
    with_label(
        button(Text::new(glyph).size(typography::TITLE_SM))
            .on_press(Message::ToggleTheme)
            .padding(spacing::XS)
            .style(styles::button::ghost),
        i18n.tr(mode.toggle_label_key()),
    )
}

/// Icon-only buttons carry their label as a tooltip.
fn with_label<'a>(
    control: impl Into<Element<'a, Message>>,
    label: String,
) -> Element<'a, Message> {
    tooltip(
        control,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::card),
        tooltip::Position::Bottom,
    )
    .into()
}
