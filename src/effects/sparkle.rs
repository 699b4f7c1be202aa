//! Sparkle: random bright-then-fading flicker of a single color.

use core::cell::RefCell;
use core::time::Duration;

use crate::animation::{Animation, AnimationError, Effect, Frame};
use crate::buffer::PixelBuffer;
use crate::time::Clock;
use palette::Srgb;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Each frame picks `S` pixels at random, lights them at full color and
/// presents, then drops them to a quarter-brightness shade with a
/// tenth-brightness trailing pixel and presents again — a two-phase
/// bright-then-fade flicker.
///
/// The half/dim shades are recomputed on color change, and any buffer pixels
/// still showing the old shades are rewritten so no stale flicker is left
/// behind.
#[derive(Debug, Clone)]
pub struct SparkleEffect<const S: usize> {
    shades: Option<(Srgb<u8>, Srgb<u8>)>,
    rng: SmallRng,
}

impl<P: PixelBuffer, const S: usize> Effect<P> for SparkleEffect<S> {
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        // Populated by the recompute hook at construction.
        let Some((half, dim)) = self.shades else {
            return;
        };

        // The last pixel is reserved for the trailing dim shade.
        let max_index = strip.len() - 2;
        let mut picks = [0usize; S];
        for pick in &mut picks {
            *pick = self.rng.gen_range(0..=max_index);
        }

        for &pixel in &picks {
            strip.set(pixel, frame.color());
        }
        strip.show();

        for &pixel in &picks {
            strip.set(pixel, half);
            strip.set(pixel + 1, dim);
        }
        strip.show();
    }

    fn recompute_color(&mut self, strip: &mut P, color: Srgb<u8>) {
        let half = Srgb::new(color.red / 4, color.green / 4, color.blue / 4);
        let dim = Srgb::new(color.red / 10, color.green / 10, color.blue / 10);

        if let Some((old_half, old_dim)) = self.shades {
            for pixel in 0..strip.len() {
                let current = strip.get(pixel);
                if current == old_half {
                    strip.set(pixel, half);
                } else if current == old_dim {
                    strip.set(pixel, dim);
                }
            }
        }
        self.shades = Some((half, dim));
    }
}

/// Sparkle animation of a single color.
///
/// `S` is the number of sparkles generated per frame.
pub type Sparkle<'a, P, C, const S: usize> = Animation<'a, P, C, SparkleEffect<S>>;

impl<'a, P: PixelBuffer, C: Clock, const S: usize> Sparkle<'a, P, C, S> {
    /// Creates a sparkle animation.
    ///
    /// # Errors
    /// * `StripTooShort` - the buffer has fewer than 2 pixels
    pub fn new(
        strip: &'a RefCell<P>,
        clock: &'a C,
        interval: Duration,
        color: Srgb<u8>,
    ) -> Result<Self, AnimationError> {
        let actual = strip.borrow().len();
        if actual < 2 {
            return Err(AnimationError::StripTooShort {
                required: 2,
                actual,
            });
        }

        let effect = SparkleEffect {
            shades: None,
            rng: SmallRng::seed_from_u64(clock.now_nanos()),
        };
        Ok(Animation::from_effect(strip, clock, interval, color, effect))
    }
}
