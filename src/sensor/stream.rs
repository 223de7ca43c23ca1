//! Explicit tilt-stream subscription.
//!
//! The platform delivers orientation events at its own pace; the engine sees
//! them through a start/stop subscription over a [`TiltSource`] so tests can
//! inject synthetic angle sequences. Stopping mid-stream is always safe.

use crate::sensor::TiltSample;
use std::collections::VecDeque;

/// Platform-reported sensor state, checked before the stream is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorStatus {
    pub available: bool,
    pub permission_granted: bool,
}

impl SensorStatus {
    pub fn usable(&self) -> bool {
        self.available && self.permission_granted
    }
}

/// Something that yields tilt samples in arrival order.
pub trait TiltSource {
    fn next_sample(&mut self) -> Option<TiltSample>;
}

/// A subscription over a source. Samples only flow while started.
pub struct TiltStream<S: TiltSource> {
    source: S,
    active: bool,
}

impl<S: TiltSource> TiltStream<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn poll(&mut self) -> Option<TiltSample> {
        if !self.active {
            return None;
        }
        self.source.next_sample()
    }
}

/// Canned sample sequence, for tests and file playback.
pub struct ReplaySource {
    samples: VecDeque<TiltSample>,
}

impl ReplaySource {
    pub fn new(samples: Vec<TiltSample>) -> Self {
        Self {
            samples: samples.into(),
        }
    }
}

impl TiltSource for ReplaySource {
    fn next_sample(&mut self) -> Option<TiltSample> {
        self.samples.pop_front()
    }
}
