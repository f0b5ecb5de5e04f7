// SPDX-License-Identifier: MPL-2.0
//! Playback clock for the embedded testimonial video.
//!
//! Frames are not decoded. The clock only tracks whether the user has the
//! video running and how far in it is, so the rotator learns when playback
//! ends. The duration is read from the MP4 movie header when the payload has
//! one; otherwise the video only stops when the user pauses it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What a clock advance produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    None,
    Ended,
}

#[derive(Debug, Clone, Default)]
pub struct VideoPlayback {
    state: PlaybackState,
    position: Duration,
    duration: Option<Duration>,
    last_instant: Option<Instant>,
}

impl VideoPlayback {
    #[must_use]
    pub fn new(duration: Option<Duration>) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Play if not playing, pause otherwise. Returns the new state.
    pub fn toggle(&mut self, now: Instant) -> PlaybackState {
        match self.state {
            PlaybackState::Playing => {
                self.advance(now);
                self.state = PlaybackState::Paused;
                self.last_instant = None;
            }
            PlaybackState::Stopped | PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                self.last_instant = Some(now);
            }
        }
        self.state
    }

    /// Moves the clock to `now`. Reaching the duration rewinds and stops.
    pub fn advance(&mut self, now: Instant) -> PlaybackEvent {
        if self.state != PlaybackState::Playing {
            return PlaybackEvent::None;
        }
        if let Some(last) = self.last_instant {
            self.position += now.saturating_duration_since(last);
        }
        self.last_instant = Some(now);

        match self.duration {
            Some(duration) if self.position >= duration => {
                self.reset();
                PlaybackEvent::Ended
            }
            _ => PlaybackEvent::None,
        }
    }

    /// Back to the start, stopped. Used when the displayed item changes.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Stopped;
        self.position = Duration::ZERO;
        self.last_instant = None;
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    #[must_use]
    pub fn position(&self) -> Duration {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Fraction played in `0.0..=1.0`, when the duration is known.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        let duration = self.duration?;
        if duration.is_zero() {
            return None;
        }
        Some((self.position.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0))
    }
}

/// Longer headers are treated as corrupt rather than as a real clip.
const MAX_PLAUSIBLE_SECS: u64 = 24 * 60 * 60;

/// Reads the presentation length from an ISO-BMFF (`.mp4`/`.mov`) payload.
///
/// Walks top-level boxes to `moov`, then its children to `mvhd`.
#[must_use]
pub fn probe_mp4_duration(bytes: &[u8]) -> Option<Duration> {
    let moov = find_box(bytes, b"moov")?;
    let mvhd = find_box(moov, b"mvhd")?;

    let version = *mvhd.first()?;
    // version(1) + flags(3)
    let body = mvhd.get(4..)?;
    let (timescale, duration) = if version == 1 {
        // creation(8) modification(8) timescale(4) duration(8)
        (read_u32(body, 16)?, read_u64(body, 20)?)
    } else {
        // creation(4) modification(4) timescale(4) duration(4)
        (read_u32(body, 8)?, u64::from(read_u32(body, 12)?))
    };

    if timescale == 0 || duration == u64::MAX || (version == 0 && duration == u64::from(u32::MAX))
    {
        return None;
    }
    let timescale = u64::from(timescale);
    let secs = duration / timescale;
    if secs > MAX_PLAUSIBLE_SECS {
        return None;
    }
    let nanos = u128::from(duration % timescale) * 1_000_000_000 / u128::from(timescale);
    Some(Duration::new(secs, u32::try_from(nanos).ok()?))
}

/// Returns the payload of the first box named `kind` in `data`.
fn find_box<'a>(data: &'a [u8], kind: &[u8; 4]) -> Option<&'a [u8]> {
    let mut offset = 0usize;
    while offset + 8 <= data.len() {
        let size32 = read_u32(data, offset)?;
        let name = data.get(offset + 4..offset + 8)?;
        let (header, size) = match size32 {
            0 => (8usize, data.len() - offset),
            1 => (16usize, usize::try_from(read_u64(data, offset + 8)?).ok()?),
            n => (8usize, n as usize),
        };
        if size < header || offset.checked_add(size)? > data.len() {
            return None;
        }
        if name == kind {
            return data.get(offset + header..offset + size);
        }
        offset += size;
    }
    None
}

fn read_u32(data: &[u8], at: usize) -> Option<u32> {
    let bytes: [u8; 4] = data.get(at..at + 4)?.try_into().ok()?;
    Some(u32::from_be_bytes(bytes))
}

fn read_u64(data: &[u8], at: usize) -> Option<u64> {
    let bytes: [u8; 8] = data.get(at..at + 8)?.try_into().ok()?;
    Some(u64::from_be_bytes(bytes))
}
