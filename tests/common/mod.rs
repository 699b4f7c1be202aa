//! Shared test infrastructure for pixel-animations integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use palette::Srgb;
use pixel_animations::{Clock, PixelBuffer};

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock clock with controllable time advancement
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance_millis(&self, millis: u64) {
        self.now.set(self.now.get() + millis * 1_000_000);
    }

    pub fn advance_nanos(&self, nanos: u64) {
        self.now.set(self.now.get() + nanos);
    }

    pub fn set_nanos(&self, nanos: u64) {
        self.now.set(nanos);
    }
}

impl Clock for MockClock {
    fn now_nanos(&self) -> u64 {
        self.now.get()
    }
}

// ============================================================================
// Mock Pixel Strip
// ============================================================================

/// Mock strip that records pixel writes and counts presents
pub struct MockStrip {
    pixels: Vec<Srgb<u8>>,
    show_count: usize,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Srgb::new(0, 0, 0); len],
            show_count: 0,
        }
    }

    pub fn pixels(&self) -> &[Srgb<u8>] {
        &self.pixels
    }

    pub fn show_count(&self) -> usize {
        self.show_count
    }
}

impl PixelBuffer for MockStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn get(&self, index: usize) -> Srgb<u8> {
        self.pixels[index]
    }

    fn set(&mut self, index: usize, color: Srgb<u8>) {
        self.pixels[index] = color;
    }

    fn show(&mut self) {
        self.show_count += 1;
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use pixel_animations::colors::{BLACK, BLUE, GREEN, RED, YELLOW};
