use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        BASE_EXPLORATION_DELAY_MS, DEFAULT_PLAYBACK_SPEED, EXPLORATION_STEPS, MAX_PLAYBACK_SPEED,
        MIN_EXPLORATION_BATCH, MIN_PLAYBACK_SPEED, TRACE_DELAY_MS, TRACE_FRAMES,
    },
    geopoint::GeoPoint,
    routing::search_result::{SearchResult, VisitEvent},
};

/// Animation speed factor, always within `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct PlaybackSpeed(u8);

impl PlaybackSpeed {
    pub const MIN: PlaybackSpeed = PlaybackSpeed(MIN_PLAYBACK_SPEED);
    pub const MAX: PlaybackSpeed = PlaybackSpeed(MAX_PLAYBACK_SPEED);

    /// Out of range values are clamped.
    pub fn new(speed: u8) -> Self {
        PlaybackSpeed(speed.clamp(MIN_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    fn exploration_delay(&self) -> SignedDuration {
        SignedDuration::from_millis((BASE_EXPLORATION_DELAY_MS - i64::from(self.0)).max(0))
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        PlaybackSpeed(DEFAULT_PLAYBACK_SPEED)
    }
}

impl From<u8> for PlaybackSpeed {
    fn from(value: u8) -> Self {
        PlaybackSpeed::new(value)
    }
}

impl From<PlaybackSpeed> for u8 {
    fn from(value: PlaybackSpeed) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame<'a> {
    /// The next batch of explored edges to draw.
    Explore {
        events: &'a [VisitEvent],
        delay: SignedDuration,
    },
    /// The path drawn so far. Each trace frame extends the previous one.
    Trace {
        path: &'a [GeoPoint],
        delay: SignedDuration,
    },
}

impl Frame<'_> {
    pub fn delay(&self) -> SignedDuration {
        match self {
            Frame::Explore { delay, .. } | Frame::Trace { delay, .. } => *delay,
        }
    }
}

/// Replays a finished search: exploration first, then the route.
///
/// The schedule only computes frames. Consumers wait for each frame's delay themselves.
pub struct PlaybackSchedule<'a> {
    events: &'a [VisitEvent],
    path: &'a [GeoPoint],
    explore_batch: usize,
    explore_delay: SignedDuration,
    explored: usize,
    trace_batch: usize,
    traced: usize,
}

impl<'a> PlaybackSchedule<'a> {
    pub fn new(result: &'a SearchResult, speed: PlaybackSpeed) -> Self {
        let events = result.visitation_log();
        let path = result.path().unwrap_or_default();

        let explore_batch = (events.len() / EXPLORATION_STEPS).max(MIN_EXPLORATION_BATCH)
            * usize::from(speed.value());

        PlaybackSchedule {
            events,
            path,
            explore_batch,
            explore_delay: speed.exploration_delay(),
            explored: 0,
            trace_batch: path.len().div_ceil(TRACE_FRAMES).max(1),
            traced: 0,
        }
    }

    pub fn exploration_batch(&self) -> usize {
        self.explore_batch
    }

    pub fn trace_batch(&self) -> usize {
        self.trace_batch
    }

    /// Total frames the schedule yields from the start.
    pub fn frame_count(&self) -> usize {
        self.events.len().div_ceil(self.explore_batch) + self.path.len().div_ceil(self.trace_batch)
    }
}

impl<'a> Iterator for PlaybackSchedule<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.explored < self.events.len() {
            let end = (self.explored + self.explore_batch).min(self.events.len());
            let events = &self.events[self.explored..end];
            self.explored = end;

            return Some(Frame::Explore {
                events,
                delay: self.explore_delay,
            });
        }

        if self.traced < self.path.len() {
            self.traced = (self.traced + self.trace_batch).min(self.path.len());

            return Some(Frame::Trace {
                path: &self.path[..self.traced],
                delay: SignedDuration::from_millis(TRACE_DELAY_MS),
            });
        }

        None
    }
}
