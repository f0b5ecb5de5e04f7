// SPDX-License-Identifier: MPL-2.0
//! Star rating display.
//!
//! The row always has [`MAX_STARS`] glyphs. Out-of-range server values are
//! clamped to `1..=5`; a missing or zero rating falls back to the configured
//! policy instead of being silently treated as a perfect score.

use crate::app::config::{DEFAULT_RATING_WHEN_MISSING, MAX_STARS};

pub const FILLED_GLYPH: char = '★';
pub const EMPTY_GLYPH: char = '☆';

/// What to show when the server sends no usable rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingPolicy {
    default_when_missing: u8,
}

impl RatingPolicy {
    /// Values above [`MAX_STARS`] are clamped.
    #[must_use]
    pub fn new(default_when_missing: u8) -> Self {
        Self {
            default_when_missing: default_when_missing.min(MAX_STARS),
        }
    }

    #[must_use]
    pub fn default_when_missing(self) -> u8 {
        self.default_when_missing
    }
}

impl Default for RatingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RATING_WHEN_MISSING)
    }
}

/// Filled/empty split for one testimonial. `filled + empty == MAX_STARS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    filled: u8,
}

impl StarRating {
    #[must_use]
    pub fn from_source(raw: Option<i64>, policy: RatingPolicy) -> Self {
        let filled = match raw {
            None | Some(0) => policy.default_when_missing,
            Some(value) => value.clamp(1, i64::from(MAX_STARS)) as u8,
        };
        Self { filled }
    }

    #[must_use]
    pub fn filled(self) -> u8 {
        self.filled
    }

    #[must_use]
    pub fn empty(self) -> u8 {
        MAX_STARS - self.filled
    }

    /// `★★★★☆` style rendering.
    #[must_use]
    pub fn glyphs(self) -> String {
        let mut out = String::with_capacity(usize::from(MAX_STARS) * 3);
        out.extend(std::iter::repeat_n(FILLED_GLYPH, usize::from(self.filled)));
        out.extend(std::iter::repeat_n(EMPTY_GLYPH, usize::from(self.empty())));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rating_has_no_empty_stars() {
        let stars = StarRating::from_source(Some(5), RatingPolicy::default());
        assert_eq!((stars.filled(), stars.empty()), (5, 0));
        assert_eq!(stars.glyphs(), "★★★★★");
    }

    #[test]
    fn missing_and_zero_use_default_policy() {
        let policy = RatingPolicy::default();
        assert_eq!(StarRating::from_source(None, policy).filled(), 5);
        assert_eq!(StarRating::from_source(Some(0), policy).filled(), 5);
    }

    #[test]
    fn configured_default_replaces_observed_one() {
        let policy = RatingPolicy::new(0);
        let stars = StarRating::from_source(None, policy);
        assert_eq!(stars.glyphs(), "☆☆☆☆☆");

        let policy = RatingPolicy::new(3);
        assert_eq!(StarRating::from_source(Some(0), policy).glyphs(), "★★★☆☆");
    }

    #[test]
    fn out_of_range_values_clamp() {
        let policy = RatingPolicy::default();
        assert_eq!(StarRating::from_source(Some(11), policy).filled(), 5);
        assert_eq!(StarRating::from_source(Some(-2), policy).filled(), 1);
    }

    #[test]
    fn glyph_count_is_always_five() {
        let policy = RatingPolicy::new(2);
        for raw in [None, Some(-1), Some(0), Some(1), Some(3), Some(5), Some(99)] {
            let stars = StarRating::from_source(raw, policy);
            assert_eq!(stars.glyphs().chars().count(), 5, "raw = {raw:?}");
        }
    }

    #[test]
    fn policy_clamps_default_above_max() {
        assert_eq!(RatingPolicy::new(9).default_when_missing(), 5);
    }
}
