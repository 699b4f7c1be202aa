//! Periodic value generators consumed by the time-driven animations.
//!
//! [`PeriodTracker`] folds actual elapsed wall-clock time into a position
//! within a fixed period, so frame-rate jitter never distorts the speed of a
//! rotation or oscillation. [`PulseGenerator`] builds on it to produce one
//! brightness oscillation of a base color per period.

use crate::colors;
use palette::Srgb;

/// Accumulates elapsed wall-clock time modulo a fixed period.
///
/// Reports the new position and whether the accumulator wrapped since the
/// previous call, which animations use as their cycle boundary.
#[derive(Debug, Clone, Copy)]
pub struct PeriodTracker {
    period_ns: u64,
    last_update: u64,
    position: u64,
}

impl PeriodTracker {
    /// Creates a tracker at phase zero.
    ///
    /// `period_ns` must be positive.
    pub fn new(period_ns: u64, now_nanos: u64) -> Self {
        debug_assert!(period_ns > 0, "period must be positive");
        Self {
            period_ns,
            last_update: now_nanos,
            position: 0,
        }
    }

    /// Advances by the time elapsed since the previous call.
    ///
    /// Returns the new position in `0..period_ns` and true if the position
    /// wrapped.
    pub fn advance(&mut self, now_nanos: u64) -> (u64, bool) {
        let elapsed = now_nanos.saturating_sub(self.last_update);
        self.last_update = now_nanos;

        let previous = self.position;
        self.position = (self.position + elapsed) % self.period_ns;
        (self.position, self.position < previous)
    }

    /// Restarts the tracker at phase zero.
    pub fn reset(&mut self, now_nanos: u64) {
        self.last_update = now_nanos;
        self.position = 0;
    }

    /// The configured period in nanoseconds.
    pub fn period_nanos(&self) -> u64 {
        self.period_ns
    }
}

/// A lazy, restartable source of brightness-scaled colors: one triangle-wave
/// oscillation of the base color per period, from black up to full
/// brightness and back.
#[derive(Debug, Clone, Copy)]
pub struct PulseGenerator {
    tracker: PeriodTracker,
}

impl PulseGenerator {
    /// Creates a generator at phase zero (black).
    ///
    /// `period_ns` must be positive.
    pub fn new(period_ns: u64, now_nanos: u64) -> Self {
        Self {
            tracker: PeriodTracker::new(period_ns, now_nanos),
        }
    }

    /// Returns the next color in the oscillation of `base`.
    pub fn next(&mut self, now_nanos: u64, base: Srgb<u8>) -> Srgb<u8> {
        let (position, _) = self.tracker.advance(now_nanos);

        let half_period = self.tracker.period_nanos() / 2;
        let distance = if position > half_period {
            self.tracker.period_nanos() - position
        } else {
            position
        };
        colors::scale(base, distance as f32 / half_period as f32)
    }

    /// Restarts the oscillation at phase zero.
    pub fn reset(&mut self, now_nanos: u64) {
        self.tracker.reset(now_nanos);
    }
}
