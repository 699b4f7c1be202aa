//! Pulse: whole-strip brightness oscillation of a single color.

use core::cell::RefCell;
use core::time::Duration;

use crate::animation::{Animation, Effect, Frame};
use crate::buffer::PixelBuffer;
use crate::generators::PulseGenerator;
use crate::time::Clock;
use palette::Srgb;

/// Pulls the next brightness-scaled color from a [`PulseGenerator`] each
/// frame and fills the whole buffer with it. The oscillation is driven by
/// elapsed wall-clock time, so the pulse period holds regardless of the
/// frame interval.
#[derive(Debug, Clone)]
pub struct PulseEffect {
    generator: PulseGenerator,
}

impl<P: PixelBuffer> Effect<P> for PulseEffect {
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        let color = self.generator.next(frame.now_nanos(), frame.color());
        strip.fill(color);
    }

    fn reset(&mut self, now_nanos: u64) {
        self.generator.reset(now_nanos);
    }
}

/// Pulse all pixels a single color.
pub type Pulse<'a, P, C> = Animation<'a, P, C, PulseEffect>;

impl<'a, P: PixelBuffer, C: Clock> Pulse<'a, P, C> {
    /// Creates a pulse animation that oscillates `color` from black to full
    /// brightness and back once per `period`.
    ///
    /// `interval` is the refresh rate; `period` must be positive.
    pub fn new(
        strip: &'a RefCell<P>,
        clock: &'a C,
        interval: Duration,
        color: Srgb<u8>,
        period: Duration,
    ) -> Self {
        let generator = PulseGenerator::new(period.as_nanos() as u64, clock.now_nanos());
        Animation::from_effect(strip, clock, interval, color, PulseEffect { generator })
    }
}
