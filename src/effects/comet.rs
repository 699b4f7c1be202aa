//! Comet: a bright head with a fading tail sweeping across the strip.

use core::cell::RefCell;
use core::cmp::min;
use core::time::Duration;

use crate::animation::{Animation, AnimationError, Effect, Frame};
use crate::buffer::PixelBuffer;
use crate::colors;
use crate::time::Clock;
use heapless::Vec;
use palette::Srgb;

/// Slides a cached color gradient across the buffer, one window position per
/// frame. The window start sweeps `-tail_length ..= len` (mirrored when
/// reversed) so the tail fully enters and exits the visible strip.
///
/// A full sweep is one pass. Without bounce, every pass signals cycle-done;
/// with bounce, the direction flips after each pass and a cycle is two
/// passes (out and back).
#[derive(Debug, Clone)]
pub struct CometEffect<const N: usize> {
    tail_length: usize,
    strip_len: usize,
    colors: Vec<Srgb<u8>, N>,
    reverse_colors: Vec<Srgb<u8>, N>,
    reverse: bool,
    bounce: bool,
    start: isize,
    passes: u8,
}

impl<const N: usize> CometEffect<N> {
    fn range_begin(&self, reverse: bool) -> isize {
        if reverse {
            self.strip_len as isize
        } else {
            -(self.tail_length as isize)
        }
    }
}

impl<P: PixelBuffer, const N: usize> Effect<P> for CometEffect<N> {
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>) {
        let len = strip.len() as isize;
        let tail = self.tail_length as isize;
        let gradient_len = self.colors.len() as isize;
        let gradient: &[Srgb<u8>] = if self.reverse {
            &self.reverse_colors
        } else {
            &self.colors
        };

        if self.start <= 0 {
            // Leading part of the window is off-strip: the visible slice is
            // anchored at pixel 0 and keeps the black pad, so the pixel
            // behind the tail is cleared as the window advances.
            let visible = min(gradient_len + self.start, len);
            if visible > 0 {
                let offset = (-self.start) as usize;
                strip.set_range(0, &gradient[offset..offset + visible as usize]);
            }
        } else {
            let end = min(gradient_len, len - self.start);
            if end > 0 {
                strip.set_range(self.start as usize, &gradient[..end as usize]);
            }
        }

        self.start += if self.reverse { -1 } else { 1 };
        let pass_over = if self.reverse {
            self.start < -tail
        } else {
            self.start > len
        };
        if pass_over {
            self.passes += 1;
            if self.bounce {
                self.reverse = !self.reverse;
            }
            if !self.bounce || self.passes == 2 {
                frame.mark_cycle_done();
                self.passes = 0;
            }
            self.start = self.range_begin(self.reverse);
        }
    }

    fn recompute_color(&mut self, _strip: &mut P, color: Srgb<u8>) {
        let step = 0.9 / self.tail_length as f32;

        self.colors.clear();
        // Capacity was validated at construction (tail_length + 1 <= N).
        let _ = self.colors.push(colors::BLACK);
        for n in 1..=self.tail_length {
            let _ = self.colors.push(colors::scale(color, n as f32 * step + 0.1));
        }

        self.reverse_colors.clear();
        for color in self.colors.iter().rev() {
            let _ = self.reverse_colors.push(*color);
        }
    }

    fn reset(&mut self, _now_nanos: u64) {
        self.passes = 0;
        self.start = self.range_begin(self.reverse);
    }
}

/// A comet animation.
///
/// `N` is the gradient capacity; `tail_length + 1` colors must fit.
pub type Comet<'a, P, C, const N: usize> = Animation<'a, P, C, CometEffect<N>>;

impl<'a, P: PixelBuffer, C: Clock, const N: usize> Comet<'a, P, C, N> {
    /// Creates a comet with a tail of `tail_length` faded pixels behind the
    /// head.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `tail_length` is zero or `tail_length + 1`
    ///   exceeds `N`
    /// * `StripTooShort` - `tail_length` exceeds the number of pixels
    pub fn new(
        strip: &'a RefCell<P>,
        clock: &'a C,
        interval: Duration,
        color: Srgb<u8>,
        tail_length: usize,
        reverse: bool,
        bounce: bool,
    ) -> Result<Self, AnimationError> {
        if tail_length == 0 || tail_length + 1 > N {
            return Err(AnimationError::CapacityExceeded);
        }

        let strip_len = strip.borrow().len();
        if tail_length > strip_len {
            return Err(AnimationError::StripTooShort {
                required: tail_length,
                actual: strip_len,
            });
        }
        let start = if reverse {
            strip_len as isize
        } else {
            -(tail_length as isize)
        };
        let effect = CometEffect {
            tail_length,
            strip_len,
            colors: Vec::new(),
            reverse_colors: Vec::new(),
            reverse,
            bounce,
            start,
            passes: 0,
        };
        Ok(Animation::from_effect(strip, clock, interval, color, effect))
    }

    /// Whether the comet is currently moving in reverse.
    pub fn reverse(&self) -> bool {
        self.effect().reverse
    }
}
