//! ColorWheel: the classic rotating hue wheel.

use core::cell::RefCell;
use core::time::Duration;

use crate::animation::{Animation, Effect, Frame};
use crate::buffer::PixelBuffer;
use crate::colors;
use crate::generators::PeriodTracker;
use crate::time::Clock;

/// Rotates the hue wheel across the strip, one full revolution per period.
///
/// The rotation is driven by accumulated wall-clock time rather than frame
/// count, so frame-rate jitter does not distort the rotation speed. The
/// accumulator wrapping is the cycle boundary.
#[derive(Debug, Clone)]
pub struct ColorWheelEffect {
    tracker: PeriodTracker,
}

impl<P: PixelBuffer> Effect<P> for ColorWheelEffect {
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        let (position, wrapped) = self.tracker.advance(frame.now_nanos());
        if wrapped {
            frame.mark_cycle_done();
        }

        let wheel_index = (position * 256 / self.tracker.period_nanos()) as usize;
        for pixel in 0..strip.len() {
            strip.set(pixel, colors::wheel(((pixel + wheel_index) % 255) as u8));
        }
    }

    fn reset(&mut self, now_nanos: u64) {
        self.tracker.reset(now_nanos);
    }
}

/// The classic colorwheel animation.
pub type ColorWheel<'a, P, C> = Animation<'a, P, C, ColorWheelEffect>;

impl<'a, P: PixelBuffer, C: Clock> ColorWheel<'a, P, C> {
    /// Creates a colorwheel that completes one revolution per `period`.
    ///
    /// `interval` is the refresh rate; `period` must be positive.
    pub fn new(
        strip: &'a RefCell<P>,
        clock: &'a C,
        interval: Duration,
        period: Duration,
    ) -> Self {
        let tracker = PeriodTracker::new(period.as_nanos() as u64, clock.now_nanos());
        Animation::from_effect(
            strip,
            clock,
            interval,
            colors::BLACK,
            ColorWheelEffect { tracker },
        )
    }
}
