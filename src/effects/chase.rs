//! Chase: theater-marquee style moving groups of lit pixels.

use core::cell::RefCell;
use core::time::Duration;

use crate::animation::{Animation, Effect, Frame};
use crate::buffer::PixelBuffer;
use crate::colors;
use crate::time::Clock;
use palette::Srgb;

/// Lights `size` pixels in a row with `spacing` dark pixels between groups,
/// repeating across the strip at a stride of `size + spacing` (the repeat
/// width), and advances the pattern one pixel per frame.
///
/// Cycle-done fires on wraparound of the phase counter (`new < old`)
/// regardless of direction, matching the historical behavior of this
/// pattern.
#[derive(Debug, Clone)]
pub struct ChaseEffect<'p> {
    size: usize,
    repeat_width: usize,
    reverse: bool,
    initial_reverse: bool,
    direction: isize,
    phase: usize,
    palette: Option<&'p [Srgb<u8>]>,
}

impl ChaseEffect<'_> {
    fn group_color(&self, base: Srgb<u8>, group: usize) -> Srgb<u8> {
        match self.palette {
            Some(palette) => palette[group % palette.len()],
            None => base,
        }
    }

    fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
        self.direction = if reverse { -1 } else { 1 };
    }
}

impl<'p, P: PixelBuffer> Effect<P> for ChaseEffect<'p> {
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        strip.fill(colors::BLACK);

        for offset in 0..self.size {
            let mut pixel = (self.phase + offset) % self.repeat_width;
            let mut group = 0;
            while pixel < strip.len() {
                strip.set(pixel, self.group_color(frame.color(), group));
                pixel += self.repeat_width;
                group += 1;
            }
        }

        let next = (self.phase as isize + self.direction)
            .rem_euclid(self.repeat_width as isize) as usize;
        if next < self.phase {
            frame.mark_cycle_done();
        }
        self.phase = next;
    }

    fn reset(&mut self, _now_nanos: u64) {
        self.phase = 0;
        self.set_reverse(self.initial_reverse);
    }
}

/// Chase pixels in one direction in a single color, like a theater marquee
/// sign.
pub type Chase<'a, P, C> = Animation<'a, P, C, ChaseEffect<'a>>;

impl<'a, P: PixelBuffer, C: Clock> Chase<'a, P, C> {
    /// Creates a chase with `size` lit pixels and `spacing` dark pixels per
    /// repeat.
    ///
    /// `size` must be positive.
    pub fn new(
        strip: &'a RefCell<P>,
        clock: &'a C,
        interval: Duration,
        color: Srgb<u8>,
        size: usize,
        spacing: usize,
        reverse: bool,
    ) -> Self {
        debug_assert!(size > 0, "chase group size must be positive");
        let effect = ChaseEffect {
            size,
            repeat_width: size + spacing,
            reverse,
            initial_reverse: reverse,
            direction: if reverse { -1 } else { 1 },
            phase: 0,
            palette: None,
        };
        Animation::from_effect(strip, clock, interval, color, effect)
    }

    /// Colors group `g` as `palette[g % palette.len()]` instead of the
    /// animation color.
    pub fn with_palette(mut self, palette: &'a [Srgb<u8>]) -> Self {
        debug_assert!(!palette.is_empty(), "chase palette must not be empty");
        self.effect_mut().palette = Some(palette);
        self
    }

    /// Whether the chase is moving in reverse.
    pub fn reverse(&self) -> bool {
        self.effect().reverse
    }

    /// Flips the direction of movement.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.effect_mut().set_reverse(reverse);
    }
}
