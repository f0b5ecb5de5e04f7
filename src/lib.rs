// SPDX-License-Identifier: MPL-2.0
//! `akanni` is a desktop rendition of the Àkanní creative studio site,
//! built with the Iced GUI framework.
//!
//! The centerpiece is the testimonials carousel: records are fetched once
//! per mount from a JSON endpoint, their base64 media is resolved to data
//! URIs, and a small state machine rotates through them while pausing for
//! an embedded video. Around it sit the site pages, validated forms,
//! Fluent i18n and a light/dark theme persisted to `settings.toml`.

pub mod app;
pub mod content;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod logging;
pub mod testimonials;
pub mod ui;
