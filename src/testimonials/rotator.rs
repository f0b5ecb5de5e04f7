// SPDX-License-Identifier: MPL-2.0
//! Timed rotation over an already-fetched collection.
//!
//! # States
//!
//! - `Idle`: nothing loaded yet, or the fetch produced an empty list
//! - `Cycling`: a timer is armed and every tick advances the index
//! - `Paused`: the current item's video is playing, no timer is armed
//!
//! The rotator does not own a clock. It hands out a [`TimerToken`] each time
//! it arms, and only a tick carrying the currently armed token advances the
//! index. The runtime keys its periodic subscription on that token, so
//! re-arming replaces the old timer and a late tick from a disarmed timer is
//! dropped on the floor.

use std::time::Duration;

/// Identity of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Idle,
    Cycling,
    Paused,
}

#[derive(Debug, Clone)]
pub struct Rotator<T> {
    items: Vec<T>,
    index: usize,
    state: RotationState,
    interval: Duration,
    armed: Option<TimerToken>,
    next_token: u64,
    loaded: bool,
    torn_down: bool,
}

impl<T> Rotator<T> {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            state: RotationState::Idle,
            interval,
            armed: None,
            next_token: 0,
            loaded: false,
            torn_down: false,
        }
    }

    /// Installs the collection for this mount. Only the first call counts.
    ///
    /// A non-empty collection moves `Idle → Cycling` and arms the timer.
    /// An empty one leaves the rotator `Idle` for good.
    pub fn load(&mut self, items: Vec<T>) {
        if self.loaded || self.torn_down {
            return;
        }
        self.loaded = true;
        self.items = items;
        self.index = 0;
        if !self.items.is_empty() {
            self.state = RotationState::Cycling;
            self.arm();
        }
    }

    /// Advances by one, wrapping. Returns whether the index moved.
    pub fn tick(&mut self, token: TimerToken) -> bool {
        if self.torn_down
            || self.state != RotationState::Cycling
            || self.armed != Some(token)
            || self.items.is_empty()
        {
            return false;
        }
        self.index = (self.index + 1) % self.items.len();
        true
    }

    /// The user started the current item's video.
    pub fn start_video(&mut self) {
        if self.torn_down || self.state != RotationState::Cycling {
            return;
        }
        self.state = RotationState::Paused;
        self.disarm();
    }

    /// The user paused the current item's video.
    pub fn stop_video(&mut self) {
        if self.torn_down || self.state != RotationState::Paused {
            return;
        }
        self.state = RotationState::Cycling;
        self.arm();
    }

    /// Click on the video: pauses rotation while playing, resumes it otherwise.
    pub fn toggle_video(&mut self) -> RotationState {
        match self.state {
            RotationState::Cycling => self.start_video(),
            RotationState::Paused => self.stop_video(),
            RotationState::Idle => {}
        }
        self.state
    }

    /// The current item's video played to the end.
    pub fn video_ended(&mut self) {
        self.stop_video();
    }

    /// Unmount. Disarms the timer and freezes the rotator.
    pub fn teardown(&mut self) {
        self.disarm();
        self.torn_down = true;
    }

    fn arm(&mut self) {
        self.next_token += 1;
        self.armed = Some(TimerToken(self.next_token));
    }

    fn disarm(&mut self) {
        self.armed = None;
    }

    #[must_use]
    pub fn armed_timer(&self) -> Option<TimerToken> {
        self.armed
    }

    #[must_use]
    pub fn state(&self) -> RotationState {
        self.state
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycling(items: Vec<u32>) -> Rotator<u32> {
        let mut rotator = Rotator::new(Duration::from_millis(5000));
        rotator.load(items);
        rotator
    }

    fn tick(rotator: &mut Rotator<u32>) -> bool {
        match rotator.armed_timer() {
            Some(token) => rotator.tick(token),
            None => false,
        }
    }

    #[test]
    fn starts_idle_without_timer() {
        let rotator: Rotator<u32> = Rotator::new(Duration::from_secs(5));
        assert_eq!(rotator.state(), RotationState::Idle);
        assert_eq!(rotator.armed_timer(), None);
        assert_eq!(rotator.current(), None);
    }

    #[test]
    fn non_empty_load_starts_cycling() {
        let rotator = cycling(vec![10, 20, 30]);
        assert_eq!(rotator.state(), RotationState::Cycling);
        assert!(rotator.armed_timer().is_some());
        assert_eq!(rotator.current(), Some(&10));
    }

    #[test]
    fn index_after_n_ticks_is_n_mod_len() {
        for len in 1..=4u32 {
            let mut rotator = cycling((0..len).collect());
            for n in 1..=13usize {
                assert!(tick(&mut rotator));
                assert_eq!(rotator.index(), n % len as usize);
            }
        }
    }

    #[test]
    fn empty_load_stays_idle_and_ticks_are_harmless() {
        let mut rotator = cycling(vec![]);
        assert_eq!(rotator.state(), RotationState::Idle);
        assert_eq!(rotator.armed_timer(), None);
        assert!(!rotator.tick(TimerToken(1)));
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn second_load_is_ignored() {
        let mut rotator = cycling(vec![1, 2]);
        rotator.load(vec![7, 8, 9]);
        assert_eq!(rotator.items(), &[1, 2]);
    }

    #[test]
    fn paused_ignores_ticks_and_resumes_from_same_index() {
        let mut rotator = cycling(vec![1, 2, 3]);
        tick(&mut rotator);
        let before_pause = rotator.armed_timer().expect("armed");

        rotator.start_video();
        assert_eq!(rotator.state(), RotationState::Paused);
        assert_eq!(rotator.armed_timer(), None);
        assert!(!rotator.tick(before_pause));
        assert_eq!(rotator.index(), 1);

        rotator.stop_video();
        assert_eq!(rotator.state(), RotationState::Cycling);
        assert_eq!(rotator.index(), 1);
        tick(&mut rotator);
        assert_eq!(rotator.index(), 2);
    }

    #[test]
    fn rearm_mints_new_token_and_old_one_goes_stale() {
        let mut rotator = cycling(vec![1, 2, 3]);
        let first = rotator.armed_timer().expect("armed");

        rotator.start_video();
        rotator.video_ended();
        let second = rotator.armed_timer().expect("re-armed");

        assert_ne!(first, second);
        assert!(!rotator.tick(first));
        assert!(rotator.tick(second));
    }

    #[test]
    fn toggle_alternates_between_cycling_and_paused() {
        let mut rotator = cycling(vec![1, 2]);
        assert_eq!(rotator.toggle_video(), RotationState::Paused);
        assert_eq!(rotator.toggle_video(), RotationState::Cycling);
    }

    #[test]
    fn toggle_while_idle_does_nothing() {
        let mut rotator: Rotator<u32> = Rotator::new(Duration::from_secs(5));
        assert_eq!(rotator.toggle_video(), RotationState::Idle);
        assert_eq!(rotator.armed_timer(), None);
    }

    #[test]
    fn teardown_disarms_and_freezes() {
        let mut rotator = cycling(vec![1, 2, 3]);
        let token = rotator.armed_timer().expect("armed");

        rotator.teardown();
        assert_eq!(rotator.armed_timer(), None);
        assert!(!rotator.tick(token));
        rotator.stop_video();
        rotator.load(vec![4]);
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.armed_timer(), None);
    }

    #[test]
    fn teardown_while_paused_keeps_timer_disarmed() {
        let mut rotator = cycling(vec![1, 2]);
        rotator.start_video();
        rotator.teardown();
        rotator.video_ended();
        assert_eq!(rotator.armed_timer(), None);
    }
}
