// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above a single vertical scrollable holding the page body.
//! Toasts float over everything in a stack layer.

use super::update::PAGE_SCROLL_ID;
use super::{Message, Route};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::pages::{about, blog, contact, footer, hero, join_form, join_section, login, signup};
use crate::ui::services::{self, ViewContext as ServicesViewContext};
use crate::ui::styles;
use crate::ui::testimonials::Section;
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Container, Id, Scrollable, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
    pub window_width: f32,
    pub year: i32,
    pub services: &'a services::State,
    pub testimonials: Option<&'a Section>,
    pub signup: &'a signup::State,
    pub login: &'a login::State,
    pub contact: &'a contact::State,
    pub join_form: &'a join_form::State,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.route,
        menu_open: ctx.menu_open,
        theme_mode: ctx.theme_mode,
        compact: ctx.window_width < sizing::MOBILE_BREAKPOINT,
    })
    .map(Message::Navbar);

    let body = Column::new()
        .width(Length::Fill)
        .push(page_body(&ctx))
        .push(footer::view(ctx.i18n, ctx.year).map(Message::Navigate));

    let page = Scrollable::new(body)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let layout = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view)
        .push(page);

    let base = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn page_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    match ctx.route {
        Route::Home => Column::new()
            .width(Length::Fill)
            .push(hero::view(i18n).map(Message::Navigate))
            .push(about::view(i18n))
            .push(join_section::view(i18n).map(Message::Navigate))
            .push(services_view(ctx))
            .push(testimonials_view(ctx))
            .into(),
        Route::About => about::view(i18n),
        Route::Services => services_view(ctx),
        Route::Testimonials => testimonials_view(ctx),
        Route::Blog => blog::view(i18n),
        Route::Contact => ctx.contact.view(i18n).map(Message::Contact),
        Route::Signup => ctx.signup.view(i18n).map(Message::Signup),
        Route::Login => ctx.login.view(i18n).map(Message::Login),
        Route::JoinForm => ctx.join_form.view(i18n).map(Message::JoinForm),
    }
}

fn services_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ctx.services
        .view(ServicesViewContext {
            i18n: ctx.i18n,
            window_width: ctx.window_width,
        })
        .map(Message::Services)
}

fn testimonials_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.testimonials {
        Some(section) => Container::new(section.view(ctx.i18n).map(Message::Testimonials))
            .width(Length::Fill)
            .style(styles::container::section_alt)
            .into(),
        None => Space::new().into(),
    }
}
