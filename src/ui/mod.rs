// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its `Message`, renders from a borrowed context and reports back to
//! the app through an `Event` or a `Task`.
//!
//! # Components
//!
//! - [`navbar`] - Brand, route links, theme toggle, collapsible menu
//! - [`pages`] - Page bodies and the form pages
//! - [`services`] - Horizontally scrolling services showcase
//! - [`testimonials`] - Rotating testimonials section
//! - [`notifications`] - Toast notifications for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod services;
pub mod styles;
pub mod testimonials;
pub mod theming;
