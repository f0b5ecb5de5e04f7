// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Route;
use crate::ui::notifications;
use crate::ui::pages::{contact, join_form, login, signup};
use crate::ui::{navbar, services, testimonials};
use iced::{window, Size};

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through their own variant.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// Link inside a page body (hero, footer, join section).
    Navigate(Route),
    Services(services::Message),
    Testimonials(testimonials::Message),
    Signup(signup::Message),
    Login(login::Message),
    Contact(contact::Message),
    JoinForm(join_form::Message),
    Notification(notifications::NotificationMessage),
    WindowResized(Size),
    /// The user closed the window; the section unmounts before exit.
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Start page as a site path such as `/contact`.
    pub route: Option<String>,
    /// Testimonials endpoint override. Beats `AKANNI_TESTIMONIALS_ENDPOINT`.
    pub endpoint: Option<String>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over `AKANNI_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
