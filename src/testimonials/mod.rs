// SPDX-License-Identifier: MPL-2.0
//! Testimonials data pipeline: fetch, decode, rotate.
//!
//! Data flows one way. The [`fetch::Fetcher`] reads raw records once per
//! mount, [`decode`] resolves their media to data URIs, and the
//! [`rotator::Rotator`] owns the decoded list and the display index for the
//! lifetime of the section. The presenter in `ui::testimonials` only reads.

pub mod data_uri;
pub mod decode;
pub mod fetch;
pub mod playback;
pub mod rating;
pub mod record;
pub mod rotator;

pub use data_uri::DataUri;
pub use decode::{decode, decode_all, resolve_media_uri, DisplayableTestimonial};
pub use fetch::Fetcher;
pub use playback::{probe_mp4_duration, PlaybackEvent, PlaybackState, VideoPlayback};
pub use rating::{RatingPolicy, StarRating};
pub use record::{MediaObject, TestimonialRecord};
pub use rotator::{RotationState, Rotator, TimerToken};
