//! The color-cycle family: [`ColorCycle`], [`Blink`] and [`Solid`].

use core::cell::RefCell;
use core::time::Duration;

use crate::animation::{Animation, AnimationError, Effect, Frame};
use crate::buffer::PixelBuffer;
use crate::colors;
use crate::time::Clock;
use heapless::Vec;
use palette::Srgb;

/// Steps through an ordered, non-empty list of colors, filling the whole
/// buffer with one color per frame. Signals cycle-done each time the index
/// wraps back to the first color.
#[derive(Debug, Clone)]
pub struct ColorCycleEffect<const N: usize> {
    colors: Vec<Srgb<u8>, N>,
    index: usize,
}

impl<const N: usize> ColorCycleEffect<N> {
    fn from_colors(list: &[Srgb<u8>]) -> Result<Self, AnimationError> {
        if list.is_empty() {
            return Err(AnimationError::EmptyPalette);
        }

        let mut colors = Vec::new();
        for color in list {
            colors
                .push(*color)
                .map_err(|_| AnimationError::CapacityExceeded)?;
        }
        Ok(Self { colors, index: 0 })
    }

    fn replace_colors(&mut self, list: &[Srgb<u8>]) {
        // Only called with lists that fit the capacity (Blink/Solid rebuild
        // fixed-size lists).
        self.colors.clear();
        for color in list {
            let _ = self.colors.push(*color);
        }
        self.index %= self.colors.len();
    }

    fn step<P: PixelBuffer>(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        frame.set_color(self.colors[self.index]);
        strip.fill(frame.color());

        self.index = (self.index + 1) % self.colors.len();
        if self.index == 0 {
            frame.mark_cycle_done();
        }
    }
}

impl<P: PixelBuffer, const N: usize> Effect<P> for ColorCycleEffect<N> {
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        self.step(strip, frame);
    }

    fn reset(&mut self, _now_nanos: u64) {
        self.index = 0;
    }
}

/// Animate a sequence of one or more colors, cycling at the configured
/// interval.
///
/// `N` is the color list capacity.
pub type ColorCycle<'a, P, C, const N: usize> = Animation<'a, P, C, ColorCycleEffect<N>>;

impl<'a, P: PixelBuffer, C: Clock, const N: usize> ColorCycle<'a, P, C, N> {
    /// Creates a color cycle over `list`.
    ///
    /// # Errors
    /// * `EmptyPalette` - `list` has no colors
    /// * `CapacityExceeded` - `list` has more than `N` colors
    pub fn new(
        strip: &'a RefCell<P>,
        clock: &'a C,
        interval: Duration,
        list: &[Srgb<u8>],
    ) -> Result<Self, AnimationError> {
        let effect = ColorCycleEffect::from_colors(list)?;
        let first = list[0];
        Ok(Animation::from_effect(strip, clock, interval, first, effect))
    }

    /// Creates a color cycle over the default [`RAINBOW`](colors::RAINBOW)
    /// palette. Requires `N >= 6`.
    pub fn rainbow(
        strip: &'a RefCell<P>,
        clock: &'a C,
        interval: Duration,
    ) -> Result<Self, AnimationError> {
        Self::new(strip, clock, interval, &colors::RAINBOW)
    }
}

/// Blinks a color on and off: a two-entry color cycle whose list is rebuilt
/// whenever the animation color changes.
#[derive(Debug, Clone)]
pub struct BlinkEffect {
    cycle: ColorCycleEffect<2>,
}

impl<P: PixelBuffer> Effect<P> for BlinkEffect {
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        self.cycle.step(strip, frame);
    }

    fn recompute_color(&mut self, _strip: &mut P, color: Srgb<u8>) {
        self.cycle.replace_colors(&[color, colors::BLACK]);
    }

    fn reset(&mut self, _now_nanos: u64) {
        self.cycle.index = 0;
    }
}

/// Blink a color on and off.
pub type Blink<'a, P, C> = Animation<'a, P, C, BlinkEffect>;

impl<'a, P: PixelBuffer, C: Clock> Blink<'a, P, C> {
    /// Creates a blink animation. One cycle is one on/off pair of frames.
    pub fn new(strip: &'a RefCell<P>, clock: &'a C, interval: Duration, color: Srgb<u8>) -> Self {
        let effect = BlinkEffect {
            cycle: ColorCycleEffect {
                colors: Vec::new(),
                index: 0,
            },
        };
        // from_effect runs the recompute hook, which populates the pair.
        Animation::from_effect(strip, clock, interval, color, effect)
    }
}

/// Holds a single solid color. Cycle-done is suppressed entirely: a
/// one-color list never meaningfully completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl<P: PixelBuffer> Effect<P> for SolidEffect {
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        strip.fill(frame.color());
    }
}

/// A solid color.
pub type Solid<'a, P, C> = Animation<'a, P, C, SolidEffect>;

impl<'a, P: PixelBuffer, C: Clock> Solid<'a, P, C> {
    /// Creates a solid-color animation, refreshed once per second.
    pub fn new(strip: &'a RefCell<P>, clock: &'a C, color: Srgb<u8>) -> Self {
        Animation::from_effect(strip, clock, Duration::from_secs(1), color, SolidEffect)
    }
}
