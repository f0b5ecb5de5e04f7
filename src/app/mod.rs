// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the site's pages.
//!
//! The `App` struct owns the route, the theme, every page's local state and
//! the mounted testimonials section, and translates messages into side
//! effects like config persistence or the testimonials fetch. Settings are
//! read once at boot; the only write-back is the theme toggle.

pub mod config;
mod message;
pub mod paths;
mod persistence;
pub mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::i18n::fluent::I18n;
use crate::testimonials::Fetcher;
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::{contact, join_form, login, signup};
use crate::ui::services;
use crate::ui::testimonials::Section;
use crate::ui::theming::ThemeMode;
use chrono::Datelike;
use config::{Config, TestimonialsConfig};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    route: Route,
    menu_open: bool,
    theme_mode: ThemeMode,
    /// `settings.toml` as loaded, written back on theme changes.
    settings: Config,
    /// `None` uses the regular config dir resolution.
    config_dir: Option<PathBuf>,
    /// Effective testimonials settings after CLI/env overrides.
    testimonials_config: TestimonialsConfig,
    /// `None` when the endpoint could not be turned into a client.
    fetcher: Option<Fetcher>,
    testimonials: Option<Section>,
    next_mount: u64,
    services: services::State,
    signup: signup::State,
    login: login::State,
    contact: contact::State,
    join_form: join_form::State,
    notifications: notifications::Manager,
    window_width: f32,
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("theme_mode", &self.theme_mode)
            .field("mounted", &self.testimonials.as_ref().map(Section::mount))
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings. Close requests are handled by the app so
/// the testimonials section can unmount first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced calls boot through `Fn`; the flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings from the resolved config dir and boots.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (settings, warning) = config::load();
        Self::boot(flags, settings, warning, None)
    }

    fn boot(
        flags: Flags,
        settings: Config,
        config_warning: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &settings);

        let mut testimonials_config = settings.testimonials.clone();
        testimonials_config.apply_endpoint_override(flags.endpoint.clone());
        let fetcher = match Fetcher::new(&testimonials_config) {
            Ok(fetcher) => Some(fetcher),
            Err(error) => {
                tracing::warn!(%error, endpoint = %testimonials_config.endpoint, "cannot build testimonials client");
                None
            }
        };

        let start = flags
            .route
            .as_deref()
            .map(Route::resolve)
            .unwrap_or_default();

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let mut app = App {
            i18n,
            route: start,
            menu_open: false,
            theme_mode: settings.general.theme_mode(),
            settings,
            config_dir,
            testimonials_config,
            fetcher,
            testimonials: None,
            next_mount: 0,
            services: services::State::default(),
            signup: signup::State::default(),
            login: login::State::default(),
            contact: contact::State::default(),
            join_form: join_form::State::default(),
            notifications,
            window_width: WINDOW_DEFAULT_WIDTH,
            year: chrono::Local::now().year(),
        };

        tracing::info!(
            route = start.path(),
            locale = %app.i18n.current_locale(),
            theme = ?app.theme_mode,
            "starting"
        );

        let task = if start.shows_testimonials() {
            update::mount_testimonials(&mut app.update_context())
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let site = self.i18n.tr("window-title");
        if self.route == Route::Home {
            site
        } else {
            format!("{} - {site}", self.i18n.tr(self.route.label_key()))
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_notification_subscription(
                self.notifications.has_notifications(),
            ),
            subscription::create_testimonials_subscription(self.testimonials.as_ref()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
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

    fn update(&mut self, message: Message) -> Task<Message> {
        match &message {
            Message::WindowResized(size) => {
                self.window_width = size.width;
                return Task::none();
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                return Task::none();
            }
            _ => {}
        }

        let mut ctx = self.update_context();
        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Navigate(route) => update::handle_navigate(&mut ctx, route),
            Message::Services(services_message) => ctx
                .services
                .update(services_message)
                .map(Message::Services),
            Message::Testimonials(section_message) => {
                update::handle_testimonials_message(&mut ctx, section_message);
                Task::none()
            }
            Message::Signup(page_message) => {
                let event = ctx.signup.update(page_message);
                update::handle_page_event(&mut ctx, event)
            }
            Message::Login(page_message) => {
                let event = ctx.login.update(page_message);
                update::handle_page_event(&mut ctx, event)
            }
            Message::Contact(page_message) => {
                let event = ctx.contact.update(page_message);
                update::handle_page_event(&mut ctx, event)
            }
            Message::JoinForm(page_message) => {
                let event = ctx.join_form.update(page_message);
                update::handle_page_event(&mut ctx, event)
            }
            Message::WindowCloseRequested(id) => {
                update::unmount_testimonials(&mut ctx);
                window::close(id)
            }
            Message::WindowResized(_) | Message::Notification(_) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: self.route,
            menu_open: self.menu_open,
            theme_mode: self.theme_mode,
            window_width: self.window_width,
            year: self.year,
            services: &self.services,
            testimonials: self.testimonials.as_ref(),
            signup: &self.signup,
            login: &self.login,
            contact: &self.contact,
            join_form: &self.join_form,
            notifications: &self.notifications,
        })
    }
}
