//! Pixel buffer abstraction.
//!
//! The core never talks to LED hardware directly. Implement [`PixelBuffer`]
//! for your strip driver (WS2812, APA102, a PWM-driven single LED, or a test
//! double) and animations will read and write colors through it.

use palette::Srgb;

/// Trait for abstracting an addressable array of RGB pixels.
///
/// Colors are 8-bit-per-channel `Srgb<u8>`. Implementations for RGBW
/// hardware derive the white channel themselves (e.g. `w = min(r, g, b)`);
/// the core only computes RGB.
///
/// Writes take effect on [`show`](PixelBuffer::show), which flushes the
/// buffered state to the hardware. `show` is assumed to always succeed or
/// fault fatally; the core never retries it.
pub trait PixelBuffer {
    /// Number of pixels in the buffer.
    fn len(&self) -> usize;

    /// Returns true if the buffer holds no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the color of the pixel at `index`.
    ///
    /// # Panics
    /// May panic if `index >= len()`; bounds are the caller's responsibility.
    fn get(&self, index: usize) -> Srgb<u8>;

    /// Sets the pixel at `index` to `color`.
    fn set(&mut self, index: usize, color: Srgb<u8>);

    /// Writes a contiguous run of colors starting at `start`.
    fn set_range(&mut self, start: usize, colors: &[Srgb<u8>]) {
        for (offset, color) in colors.iter().enumerate() {
            self.set(start + offset, *color);
        }
    }

    /// Sets every pixel to `color`.
    fn fill(&mut self, color: Srgb<u8>) {
        for index in 0..self.len() {
            self.set(index, color);
        }
    }

    /// Flushes the buffered pixel state to the hardware.
    fn show(&mut self);
}
