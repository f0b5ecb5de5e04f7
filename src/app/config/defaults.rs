// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Testimonials**: Endpoint, rotation timing, request timeout
//! - **Rating**: Star row size and missing-rating policy
//! - **Timers**: UI refresh cadences
//! - **Showcase**: Services track geometry

// ==========================================================================
// Testimonials Defaults
// ==========================================================================

/// Endpoint used when neither the CLI, the environment nor the config file
/// names one.
pub const DEFAULT_TESTIMONIALS_ENDPOINT: &str = "http://localhost:8000/api/v1/testimonials/";

/// Environment variable overriding the testimonials endpoint.
pub const ENV_TESTIMONIALS_ENDPOINT: &str = "AKANNI_TESTIMONIALS_ENDPOINT";

/// Time each testimonial stays on screen (in milliseconds).
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5000;

/// Minimum rotation interval (in milliseconds).
pub const MIN_ROTATION_INTERVAL_MS: u64 = 1000;

/// Maximum rotation interval (in milliseconds).
pub const MAX_ROTATION_INTERVAL_MS: u64 = 60_000;

/// Default HTTP timeout for the testimonials request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum HTTP timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Rating Defaults
// ==========================================================================

/// Number of glyphs in a star row.
pub const MAX_STARS: u8 = 5;

/// Stars shown when the server sends no rating (or zero).
/// Five reproduces what the site has always displayed.
pub const DEFAULT_RATING_WHEN_MISSING: u8 = 5;

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Video playback clock resolution (in milliseconds).
pub const PLAYBACK_TICK_MS: u64 = 250;

/// Notification auto-dismiss polling (in milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Showcase Defaults
// ==========================================================================

/// Width of one service card in the horizontal track.
pub const SERVICE_CARD_WIDTH: f32 = 300.0;

/// One arrow press scrolls this many cards.
pub const SERVICE_SCROLL_CARDS: f32 = 1.5;

const _: () = {
    assert!(MIN_ROTATION_INTERVAL_MS <= DEFAULT_ROTATION_INTERVAL_MS);
    assert!(DEFAULT_ROTATION_INTERVAL_MS <= MAX_ROTATION_INTERVAL_MS);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_RATING_WHEN_MISSING <= MAX_STARS);
};
