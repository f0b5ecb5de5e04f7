// SPDX-License-Identifier: MPL-2.0
//! Testimonials carousel section.
//!
//! One [`Section`] exists per mount. It starts in the loading placeholder,
//! turns the fetched records into slides once, and from then on only moves
//! the rotator and the video clock. Media bytes are decoded when the slides
//! are built, never during `view`.
//!
//! Results are tagged with the mount id they were requested for; a result
//! for another mount is dropped.

use crate::app::config::PLAYBACK_TICK_MS;
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::testimonials::{
    decode_all, probe_mp4_duration, DataUri, DisplayableTestimonial, PlaybackEvent, RatingPolicy,
    RotationState, Rotator, StarRating, TestimonialRecord, TimerToken, VideoPlayback,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment, time, Element, Length, Subscription};
use std::time::{Duration, Instant};

/// Identifies one mount of the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(pub u64);

#[derive(Debug, Clone)]
pub enum Message {
    Fetched {
        mount: MountId,
        result: Result<Vec<TestimonialRecord>, FetchError>,
    },
    RotationTick(TimerToken),
    ToggleVideo,
    PlaybackTick(Instant),
}

/// Prepared image slot.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Absent,
    Ready(image::Handle),
    Undisplayable,
}

/// Prepared video slot. Frames are never decoded; only the length is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VideoSlot {
    Absent,
    Ready { duration: Option<Duration> },
    Undisplayable,
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub testimonial: DisplayableTestimonial,
    pub stars: StarRating,
    pub image: ImageSlot,
    pub video: VideoSlot,
}

impl Slide {
    pub fn prepare(testimonial: DisplayableTestimonial, policy: RatingPolicy) -> Self {
        let stars = StarRating::from_source(testimonial.rating, policy);
        let image = prepare_image(testimonial.image_uri.as_deref());
        let video = prepare_video(testimonial.video_uri.as_deref());
        if matches!(image, ImageSlot::Undisplayable) || video == VideoSlot::Undisplayable {
            tracing::debug!(id = testimonial.id, "testimonial media could not be decoded");
        }
        Self {
            testimonial,
            stars,
            image,
            video,
        }
    }
}

fn prepare_image(uri: Option<&str>) -> ImageSlot {
    let Some(uri) = uri else {
        return ImageSlot::Absent;
    };
    match DataUri::parse(uri) {
        Some(data) if data.is_image() => match data.decode() {
            Ok(bytes) => ImageSlot::Ready(image::Handle::from_bytes(bytes)),
            Err(_) => ImageSlot::Undisplayable,
        },
        _ => ImageSlot::Undisplayable,
    }
}

fn prepare_video(uri: Option<&str>) -> VideoSlot {
    let Some(uri) = uri else {
        return VideoSlot::Absent;
    };
    match DataUri::parse(uri) {
        Some(data) if data.is_video() => match data.decode() {
            Ok(bytes) => VideoSlot::Ready {
                duration: probe_mp4_duration(&bytes),
            },
            Err(_) => VideoSlot::Undisplayable,
        },
        _ => VideoSlot::Undisplayable,
    }
}

#[derive(Debug)]
pub struct Section {
    mount: MountId,
    /// Set once the fetch answered, successfully or not.
    settled: bool,
    rotator: Rotator<Slide>,
    playback: VideoPlayback,
    policy: RatingPolicy,
    /// Index changes observed since mount.
    advances: u64,
}

impl Section {
    #[must_use]
    pub fn new(mount: MountId, interval: Duration, policy: RatingPolicy) -> Self {
        Self {
            mount,
            settled: false,
            rotator: Rotator::new(interval),
            playback: VideoPlayback::default(),
            policy,
            advances: 0,
        }
    }

    #[must_use]
    pub fn mount(&self) -> MountId {
        self.mount
    }

    #[must_use]
    pub fn rotator(&self) -> &Rotator<Slide> {
        &self.rotator
    }

    #[must_use]
    pub fn playback(&self) -> &VideoPlayback {
        &self.playback
    }

    /// Number of times the displayed slide changed since mount.
    #[must_use]
    pub fn advances(&self) -> u64 {
        self.advances
    }

    /// True while the loading placeholder shows.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.rotator.is_loaded()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Fetched { mount, result } => self.on_fetched(mount, result),
            Message::RotationTick(token) => {
                if self.rotator.tick(token) {
                    self.advances += 1;
                    self.reset_playback_for_current();
                }
            }
            Message::ToggleVideo => self.toggle_video(Instant::now()),
            Message::PlaybackTick(now) => {
                if self.playback.advance(now) == PlaybackEvent::Ended {
                    self.rotator.video_ended();
                }
            }
        }
    }

    fn on_fetched(&mut self, mount: MountId, result: Result<Vec<TestimonialRecord>, FetchError>) {
        if mount != self.mount {
            tracing::debug!(
                stale = mount.0,
                current = self.mount.0,
                "dropping testimonials for a previous mount"
            );
            return;
        }
        if self.settled {
            return;
        }
        self.settled = true;

        match result {
            Ok(records) => {
                let policy = self.policy;
                let slides: Vec<Slide> = decode_all(records)
                    .into_iter()
                    .map(|testimonial| Slide::prepare(testimonial, policy))
                    .collect();
                tracing::info!(count = slides.len(), "testimonials loaded");
                self.rotator.load(slides);
                self.reset_playback_for_current();
            }
            Err(error) => {
                tracing::warn!(%error, key = error.i18n_key(), "testimonials fetch failed");
            }
        }
    }

    fn toggle_video(&mut self, now: Instant) {
        let has_video = self
            .rotator
            .current()
            .is_some_and(|slide| matches!(slide.video, VideoSlot::Ready { .. }));
        if !has_video || self.rotator.is_torn_down() || self.rotator.state() == RotationState::Idle {
            return;
        }

        self.playback.toggle(now);
        if self.playback.is_playing() {
            self.rotator.start_video();
        } else {
            self.rotator.stop_video();
        }
    }

    fn reset_playback_for_current(&mut self) {
        let duration = match self.rotator.current().map(|slide| slide.video) {
            Some(VideoSlot::Ready { duration }) => duration,
            _ => None,
        };
        self.playback = VideoPlayback::new(duration);
    }

    /// Unmount: no timer stays armed and nothing moves afterwards.
    pub fn teardown(&mut self) {
        self.rotator.teardown();
        self.playback.reset();
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let rotation = match self.rotator.armed_timer() {
            Some(token) => time::every(self.rotator.interval())
                .with(token)
                .map(|(token, _)| Message::RotationTick(token)),
            None => Subscription::none(),
        };

        let playback = if self.playback.is_playing() && !self.rotator.is_torn_down() {
            time::every(Duration::from_millis(PLAYBACK_TICK_MS)).map(Message::PlaybackTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([rotation, playback])
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = Text::new(i18n.tr("testimonials-title")).size(typography::TITLE_LG);

        let body: Element<'a, Message> = if self.is_loading() {
            placeholder(i18n.tr("testimonials-loading"))
        } else if let Some(slide) = self.rotator.current() {
            self.view_slide(slide, i18n)
        } else {
            placeholder(i18n.tr("testimonials-empty"))
        };

        let mut column = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(heading)
            .push(body);

        if self.rotator.len() > 1 {
            column = column.push(self.dots());
        }

        Container::new(column)
            .width(Length::Fill)
            .padding([spacing::XXL, spacing::LG])
            .into()
    }

    fn view_slide<'a>(&'a self, slide: &'a Slide, i18n: &'a I18n) -> Element<'a, Message> {
        let testimonial = &slide.testimonial;

        let mut header = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(testimonial.name.as_str()).size(typography::TITLE_SM));
        if let Some(byline) = testimonial.byline() {
            header = header.push(
                Text::new(byline)
                    .size(typography::CAPTION)
                    .style(styles::text::secondary),
            );
        }

        let stars = Row::new()
            .push(
                Text::new(filled_glyphs(slide.stars))
                    .size(typography::TITLE_SM)
                    .style(styles::text::star_lit),
            )
            .push(
                Text::new(empty_glyphs(slide.stars))
                    .size(typography::TITLE_SM)
                    .style(styles::text::star_unlit),
            );

        let quote = Text::new(format!("“{}”", testimonial.content)).size(typography::BODY_LG);

        let media = Row::new()
            .spacing(spacing::MD)
            .push(self.image_slot(&slide.image, i18n))
            .push(self.video_slot(slide.video, i18n));

        let card = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(stars)
            .push(quote)
            .push(media);

        Container::new(card)
            .padding(spacing::LG)
            .max_width(sizing::TESTIMONIAL_CARD_WIDTH)
            .style(styles::container::card)
            .into()
    }

    fn image_slot<'a>(&self, slot: &'a ImageSlot, i18n: &I18n) -> Element<'a, Message> {
        match slot {
            ImageSlot::Ready(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::TESTIMONIAL_MEDIA_HEIGHT))
                .into(),
            ImageSlot::Absent => media_message(i18n.tr("testimonials-image-unavailable")),
            ImageSlot::Undisplayable => media_message(i18n.tr("testimonials-media-broken")),
        }
    }

    fn video_slot<'a>(&self, slot: VideoSlot, i18n: &I18n) -> Element<'a, Message> {
        match slot {
            VideoSlot::Absent => media_message(i18n.tr("testimonials-video-unavailable")),
            VideoSlot::Undisplayable => media_message(i18n.tr("testimonials-media-broken")),
            VideoSlot::Ready { .. } => {
                let (glyph, label) = if self.playback.is_playing() {
                    ("⏸", i18n.tr("testimonials-video-pause"))
                } else {
                    ("▶", i18n.tr("testimonials-video-play"))
                };
                let toggle = button(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(alignment::Vertical::Center)
                        .push(Text::new(glyph).size(typography::TITLE_MD))
                        .push(Text::new(label).size(typography::BODY)),
                )
                .on_press(Message::ToggleVideo)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary);

                let mut column = Column::new()
                    .spacing(spacing::SM)
                    .align_x(alignment::Horizontal::Center)
                    .push(toggle);
                if let Some(progress) = self.playback.progress() {
                    column = column.push(progress_bar(progress));
                }

                Container::new(column)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::TESTIMONIAL_MEDIA_HEIGHT))
                    .center_x(Length::Fill)
                    .center_y(Length::Fixed(sizing::TESTIMONIAL_MEDIA_HEIGHT))
                    .style(styles::container::media_placeholder)
                    .into()
            }
        }
    }

    fn dots<'a>(&self) -> Element<'a, Message> {
        let current = self.rotator.index();
        (0..self.rotator.len())
            .fold(Row::new().spacing(spacing::XS), |row, i| {
                let dot = Text::new(if i == current { "●" } else { "○" })
                    .size(typography::CAPTION)
                    .style(styles::text::brand);
                row.push(dot)
            })
            .into()
    }
}

fn filled_glyphs(stars: StarRating) -> String {
    stars.glyphs().chars().take(usize::from(stars.filled())).collect()
}

fn empty_glyphs(stars: StarRating) -> String {
    stars.glyphs().chars().skip(usize::from(stars.filled())).collect()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG).style(styles::text::secondary))
        .padding(spacing::XL)
        .into()
}

fn media_message<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TESTIMONIAL_MEDIA_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::TESTIMONIAL_MEDIA_HEIGHT))
        .style(styles::container::media_placeholder)
        .into()
}

fn progress_bar<'a>(progress: f32) -> Element<'a, Message> {
    let filled = (progress * 1000.0).round() as u16;
    let rest = 1000u16.saturating_sub(filled);

    let mut track = Row::new().height(Length::Fixed(sizing::PROGRESS_TRACK));
    if filled > 0 {
        track = track.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::progress_fill),
        );
    }
    if rest > 0 {
        track = track.push(Space::new().width(Length::FillPortion(rest)));
    }

    Container::new(track)
        .width(Length::Fixed(sizing::TESTIMONIAL_CARD_WIDTH / 3.0))
        .style(styles::container::progress_track)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testimonials::MediaObject;
    use base64::Engine;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn record(id: i64, video: Option<MediaObject>) -> TestimonialRecord {
        TestimonialRecord {
            id,
            name: format!("Client {id}"),
            role: Some("Founder".into()),
            company: None,
            content: "Great work".into(),
            rating: Some(4),
            is_featured: false,
            image: None,
            video,
        }
    }

    fn mp4_payload(seconds: u32) -> String {
        fn boxed(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
            let mut out = ((payload.len() + 8) as u32).to_be_bytes().to_vec();
            out.extend_from_slice(kind);
            out.extend_from_slice(payload);
            out
        }
        let mut mvhd = vec![0u8; 12];
        mvhd.extend_from_slice(&1000u32.to_be_bytes());
        mvhd.extend_from_slice(&(seconds * 1000).to_be_bytes());
        let moov = boxed(b"moov", &boxed(b"mvhd", &mvhd));
        base64::engine::general_purpose::STANDARD.encode(moov)
    }

    fn video(seconds: u32) -> MediaObject {
        MediaObject {
            filename: Some("clip.mp4".into()),
            content_type: Some("video/mp4".into()),
            content: Some(mp4_payload(seconds)),
            error: None,
        }
    }

    fn loaded(records: Vec<TestimonialRecord>) -> Section {
        let mut section = Section::new(MountId(1), INTERVAL, RatingPolicy::default());
        section.update(Message::Fetched {
            mount: MountId(1),
            result: Ok(records),
        });
        section
    }

    fn tick(section: &mut Section) {
        if let Some(token) = section.rotator().armed_timer() {
            section.update(Message::RotationTick(token));
        }
    }

    #[test]
    fn starts_in_loading_placeholder() {
        let section = Section::new(MountId(7), INTERVAL, RatingPolicy::default());
        assert!(section.is_loading());
        assert_eq!(section.rotator().state(), RotationState::Idle);
    }

    #[test]
    fn failed_fetch_keeps_loading_forever() {
        let mut section = Section::new(MountId(1), INTERVAL, RatingPolicy::default());
        section.update(Message::Fetched {
            mount: MountId(1),
            result: Err(FetchError::Status(503)),
        });
        assert!(section.is_loading());
        assert!(section.rotator().armed_timer().is_none());
    }

    #[test]
    fn empty_fetch_stays_idle() {
        let mut section = loaded(Vec::new());
        assert!(!section.is_loading());
        assert_eq!(section.rotator().state(), RotationState::Idle);
        assert!(section.rotator().armed_timer().is_none());
        section.update(Message::ToggleVideo);
        assert_eq!(section.advances(), 0);
    }

    #[test]
    fn stale_mount_result_is_ignored() {
        let mut section = Section::new(MountId(2), INTERVAL, RatingPolicy::default());
        section.update(Message::Fetched {
            mount: MountId(1),
            result: Ok(vec![record(1, None)]),
        });
        assert!(section.is_loading());
    }

    #[test]
    fn ticks_rotate_and_wrap() {
        let mut section = loaded(vec![record(1, None), record(2, None), record(3, None)]);
        assert_eq!(section.rotator().state(), RotationState::Cycling);
        for _ in 0..4 {
            tick(&mut section);
        }
        assert_eq!(section.rotator().index(), 1);
        assert_eq!(section.advances(), 4);
    }

    #[test]
    fn playing_video_pauses_rotation_and_end_resumes_it() {
        let mut section = loaded(vec![record(1, Some(video(2))), record(2, None)]);
        assert_eq!(
            section.playback().duration(),
            Some(Duration::from_secs(2))
        );

        let start = Instant::now();
        section.toggle_video(start);
        assert_eq!(section.rotator().state(), RotationState::Paused);
        assert!(section.rotator().armed_timer().is_none());

        section.update(Message::PlaybackTick(start + Duration::from_secs(3)));
        assert_eq!(section.rotator().state(), RotationState::Cycling);
        assert_eq!(section.rotator().index(), 0);
        assert!(section.rotator().armed_timer().is_some());
    }

    #[test]
    fn toggling_twice_resumes_from_same_index() {
        let mut section = loaded(vec![record(1, None), record(2, Some(video(30)))]);
        tick(&mut section);
        assert_eq!(section.rotator().index(), 1);

        let now = Instant::now();
        section.toggle_video(now);
        assert_eq!(section.rotator().state(), RotationState::Paused);
        section.toggle_video(now + Duration::from_secs(1));
        assert_eq!(section.rotator().state(), RotationState::Cycling);
        assert_eq!(section.rotator().index(), 1);
    }

    #[test]
    fn toggle_without_video_does_nothing() {
        let mut section = loaded(vec![record(1, None)]);
        section.update(Message::ToggleVideo);
        assert_eq!(section.rotator().state(), RotationState::Cycling);
    }

    #[test]
    fn teardown_stops_all_updates() {
        let mut section = loaded(vec![record(1, None), record(2, None)]);
        let token = section.rotator().armed_timer().expect("armed");
        section.teardown();
        section.update(Message::RotationTick(token));
        assert_eq!(section.advances(), 0);
        assert!(section.rotator().armed_timer().is_none());
    }

    #[test]
    fn broken_media_is_undisplayable_not_fatal() {
        let slide = Slide::prepare(
            DisplayableTestimonial {
                id: 9,
                name: "N".into(),
                role: None,
                company: None,
                content: "c".into(),
                rating: None,
                is_featured: false,
                image_uri: Some("data:image/png;base64,!!!not-base64!!!".into()),
                video_uri: Some("data:text/plain;base64,Zm9v".into()),
            },
            RatingPolicy::default(),
        );
        assert!(matches!(slide.image, ImageSlot::Undisplayable));
        assert_eq!(slide.video, VideoSlot::Undisplayable);
        assert_eq!(slide.stars.filled(), 5);
    }

    #[test]
    fn star_halves_add_up_to_five() {
        let stars = StarRating::from_source(Some(3), RatingPolicy::default());
        assert_eq!(filled_glyphs(stars), "★★★");
        assert_eq!(empty_glyphs(stars), "☆☆");
    }

    #[test]
    fn view_renders_in_each_phase() {
        let i18n = I18n::default();
        let loading = Section::new(MountId(1), INTERVAL, RatingPolicy::default());
        let _ = loading.view(&i18n);
        let empty = loaded(Vec::new());
        let _ = empty.view(&i18n);
        let full = loaded(vec![record(1, Some(video(4))), record(2, None)]);
        let _ = full.view(&i18n);
    }
}
