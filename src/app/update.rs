// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Routing owns the testimonials lifecycle: entering a route that shows the
//! section mounts a fresh [`testimonials::Section`] and starts its fetch;
//! leaving it tears the section down. Every other handler only forwards to
//! a component and reacts to the [`pages::Event`] it returns.

use super::config::{Config, TestimonialsConfig};
use super::{persistence, Message, Route};
use crate::testimonials::Fetcher;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::{self, contact, join_form, login, signup};
use crate::ui::services;
use crate::ui::testimonials::{self, MountId, Section};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;

/// Id of the page-level scrollable, reset to the top on navigation.
pub const PAGE_SCROLL_ID: &str = "page-scroll";

/// Mutable view of the [`App`](super::App) fields the handlers touch.
pub struct UpdateContext<'a> {
    pub route: &'a mut Route,
    pub menu_open: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    /// Settings as read from disk, without CLI/env overrides.
    pub settings: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub testimonials_config: &'a TestimonialsConfig,
    pub fetcher: &'a Option<Fetcher>,
    pub testimonials: &'a mut Option<Section>,
    pub next_mount: &'a mut u64,
    pub services: &'a mut services::State,
    pub signup: &'a mut signup::State,
    pub login: &'a mut login::State,
    pub contact: &'a mut contact::State,
    pub join_form: &'a mut join_form::State,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(route) => handle_navigate(ctx, route),
        NavbarEvent::ToggleTheme => {
            handle_theme_toggle(ctx);
            Task::none()
        }
    }
}

/// Switches page. Same-route navigation is a no-op so the section is not
/// remounted by clicking the active link.
pub fn handle_navigate(ctx: &mut UpdateContext<'_>, target: Route) -> Task<Message> {
    *ctx.menu_open = false;
    let previous = *ctx.route;
    if previous == target {
        return Task::none();
    }

    tracing::debug!(from = previous.path(), to = target.path(), "navigate");
    unmount_testimonials(ctx);
    *ctx.route = target;

    let fetch = if target.shows_testimonials() {
        mount_testimonials(ctx)
    } else {
        Task::none()
    };

    let scroll_to_top = operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset::START);
    Task::batch([fetch, scroll_to_top])
}

/// Creates a section for a new mount id and issues its single fetch.
pub fn mount_testimonials(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.next_mount += 1;
    let mount = MountId(*ctx.next_mount);
    *ctx.testimonials = Some(Section::new(
        mount,
        ctx.testimonials_config.rotation_interval(),
        ctx.testimonials_config.rating_policy(),
    ));

    let Some(fetcher) = ctx.fetcher.clone() else {
        tracing::warn!("testimonials endpoint unusable, section stays in loading state");
        return Task::none();
    };

    tracing::debug!(mount = mount.0, endpoint = %fetcher.endpoint(), "fetching testimonials");
    Task::perform(async move { fetcher.fetch().await }, move |result| {
        Message::Testimonials(testimonials::Message::Fetched { mount, result })
    })
}

pub fn unmount_testimonials(ctx: &mut UpdateContext<'_>) {
    if let Some(mut section) = ctx.testimonials.take() {
        tracing::debug!(mount = section.mount().0, "unmounting testimonials");
        section.teardown();
    }
}

pub fn handle_testimonials_message(ctx: &mut UpdateContext<'_>, message: testimonials::Message) {
    match ctx.testimonials.as_mut() {
        Some(section) => section.update(message),
        None => {
            if let testimonials::Message::Fetched { mount, .. } = message {
                tracing::debug!(mount = mount.0, "testimonials arrived after unmount");
            }
        }
    }
}

/// Flips the effective theme and writes it out right away.
pub fn handle_theme_toggle(ctx: &mut UpdateContext<'_>) {
    let next = ctx.theme_mode.toggled();
    *ctx.theme_mode = next;
    if !persistence::persist_theme(ctx.settings, next, ctx.config_dir.clone()) {
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

pub fn handle_page_event(ctx: &mut UpdateContext<'_>, event: pages::Event) -> Task<Message> {
    match event {
        pages::Event::None => Task::none(),
        pages::Event::Navigate(route) => handle_navigate(ctx, route),
        pages::Event::Submitted(key) => {
            ctx.notifications.push(Notification::success(key));
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testimonials::RotationState;

    struct Fixture {
        route: Route,
        menu_open: bool,
        theme_mode: ThemeMode,
        settings: Config,
        config_dir: Option<PathBuf>,
        testimonials_config: TestimonialsConfig,
        fetcher: Option<Fetcher>,
        testimonials: Option<Section>,
        next_mount: u64,
        services: services::State,
        signup: signup::State,
        login: login::State,
        contact: contact::State,
        join_form: join_form::State,
        notifications: notifications::Manager,
        _dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new(route: Route) -> Self {
            let dir = tempfile::tempdir().expect("temp dir");
            Self {
                route,
                menu_open: false,
                theme_mode: ThemeMode::Light,
                settings: Config::default(),
                config_dir: Some(dir.path().to_path_buf()),
                testimonials_config: TestimonialsConfig::default(),
                fetcher: None,
                testimonials: None,
                next_mount: 0,
                services: services::State::default(),
                signup: signup::State::default(),
                login: login::State::default(),
                contact: contact::State::default(),
                join_form: join_form::State::default(),
                notifications: notifications::Manager::new(),
                _dir: dir,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                route: &mut self.route,
                menu_open: &mut self.menu_open,
                theme_mode: &mut self.theme_mode,
                settings: &mut self.settings,
                config_dir: &self.config_dir,
                testimonials_config: &self.testimonials_config,
                fetcher: &self.fetcher,
                testimonials: &mut self.testimonials,
                next_mount: &mut self.next_mount,
                services: &mut self.services,
                signup: &mut self.signup,
                login: &mut self.login,
                contact: &mut self.contact,
                join_form: &mut self.join_form,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn entering_home_mounts_and_leaving_unmounts() {
        let mut fx = Fixture::new(Route::Contact);
        let _ = handle_navigate(&mut fx.ctx(), Route::Home);
        assert_eq!(fx.testimonials.as_ref().map(|s| s.mount()), Some(MountId(1)));

        let _ = handle_navigate(&mut fx.ctx(), Route::About);
        assert!(fx.testimonials.is_none());
    }

    #[test]
    fn home_to_testimonials_remounts_with_new_id() {
        let mut fx = Fixture::new(Route::Contact);
        let _ = handle_navigate(&mut fx.ctx(), Route::Home);
        let _ = handle_navigate(&mut fx.ctx(), Route::Testimonials);
        assert_eq!(fx.testimonials.as_ref().map(|s| s.mount()), Some(MountId(2)));
    }

    #[test]
    fn same_route_keeps_the_section() {
        let mut fx = Fixture::new(Route::Contact);
        let _ = handle_navigate(&mut fx.ctx(), Route::Home);
        let _ = handle_navigate(&mut fx.ctx(), Route::Home);
        assert_eq!(fx.next_mount, 1);
    }

    #[test]
    fn result_for_previous_mount_is_dropped() {
        let mut fx = Fixture::new(Route::Contact);
        let _ = handle_navigate(&mut fx.ctx(), Route::Home);
        let _ = handle_navigate(&mut fx.ctx(), Route::Testimonials);

        handle_testimonials_message(
            &mut fx.ctx(),
            testimonials::Message::Fetched {
                mount: MountId(1),
                result: Ok(Vec::new()),
            },
        );
        let section = fx.testimonials.as_ref().expect("mounted");
        assert!(section.is_loading());
        assert_eq!(section.rotator().state(), RotationState::Idle);
    }

    #[test]
    fn result_after_unmount_is_ignored() {
        let mut fx = Fixture::new(Route::Contact);
        handle_testimonials_message(
            &mut fx.ctx(),
            testimonials::Message::Fetched {
                mount: MountId(1),
                result: Ok(Vec::new()),
            },
        );
        assert!(fx.testimonials.is_none());
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let mut fx = Fixture::new(Route::Home);
        let _ = handle_navbar_message(&mut fx.ctx(), navbar::Message::ToggleTheme);
        assert_eq!(fx.theme_mode, ThemeMode::Dark);
        assert_eq!(fx.settings.general.theme, Some(ThemeMode::Dark));

        let (on_disk, _) = crate::app::config::load_with_override(fx.config_dir.clone());
        assert_eq!(on_disk.general.theme, Some(ThemeMode::Dark));

        let _ = handle_navbar_message(&mut fx.ctx(), navbar::Message::ToggleTheme);
        assert_eq!(fx.theme_mode, ThemeMode::Light);
        assert!(!fx.notifications.has_notifications());
    }

    #[test]
    fn submitted_form_shows_a_success_toast() {
        let mut fx = Fixture::new(Route::Contact);
        let _ = handle_page_event(&mut fx.ctx(), pages::Event::Submitted(contact::SUBMITTED_KEY));
        assert_eq!(fx.notifications.visible_count(), 1);
    }

    #[test]
    fn navigating_closes_the_menu() {
        let mut fx = Fixture::new(Route::Home);
        fx.menu_open = true;
        let _ = handle_navbar_message(&mut fx.ctx(), navbar::Message::Navigate(Route::Blog));
        assert!(!fx.menu_open);
        assert_eq!(fx.route, Route::Blog);
    }
}
