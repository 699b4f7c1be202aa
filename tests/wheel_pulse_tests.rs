//! Integration tests for the time-driven animations: pulse and colorwheel.

mod common;
use common::*;

use core::cell::RefCell;
use core::time::Duration;

use palette::Srgb;
use pixel_animations::colors::wheel;
use pixel_animations::{Animate, ColorWheel, Pulse, PulseGenerator};

const NANOS_PER_MILLI: u64 = 1_000_000;

#[test]
fn pulse_generator_follows_a_triangle_wave() {
    let mut generator = PulseGenerator::new(1_000 * NANOS_PER_MILLI, 0);
    let base = Srgb::new(200, 100, 40);

    assert_eq!(generator.next(0, base), BLACK);
    assert_eq!(generator.next(250 * NANOS_PER_MILLI, base), Srgb::new(100, 50, 20));
    assert_eq!(generator.next(500 * NANOS_PER_MILLI, base), base);
    assert_eq!(generator.next(750 * NANOS_PER_MILLI, base), Srgb::new(100, 50, 20));
    assert_eq!(generator.next(1_000 * NANOS_PER_MILLI, base), BLACK);
}

#[test]
fn pulse_generator_reset_returns_to_black() {
    let mut generator = PulseGenerator::new(1_000 * NANOS_PER_MILLI, 0);
    let base = Srgb::new(200, 100, 40);

    generator.next(500 * NANOS_PER_MILLI, base);
    generator.reset(600 * NANOS_PER_MILLI);
    assert_eq!(generator.next(600 * NANOS_PER_MILLI, base), BLACK);
}

#[test]
fn pulse_fills_the_strip_with_the_oscillated_color() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let base = Srgb::new(200, 100, 40);
    let mut pulse = Pulse::new(
        &strip,
        &clock,
        Duration::from_millis(50),
        base,
        Duration::from_millis(1_000),
    );

    assert!(pulse.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == BLACK));

    // Peak brightness at the half period.
    clock.advance_millis(500);
    assert!(pulse.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == base));
}

#[test]
fn pulse_period_is_wall_clock_not_frame_count() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let base = Srgb::new(200, 100, 40);
    let mut pulse = Pulse::new(
        &strip,
        &clock,
        Duration::from_millis(50),
        base,
        Duration::from_millis(1_000),
    );

    assert!(pulse.animate());

    // A single late poll lands at the same phase as ten on-time ones would.
    clock.advance_millis(250);
    assert!(pulse.animate());
    assert!(strip
        .borrow()
        .pixels()
        .iter()
        .all(|&p| p == Srgb::new(100, 50, 20)));
}

#[test]
fn colorwheel_starts_at_the_wheel_origin() {
    let strip = RefCell::new(MockStrip::new(8));
    let clock = MockClock::new();
    let mut rainbow = ColorWheel::new(
        &strip,
        &clock,
        Duration::from_millis(50),
        Duration::from_secs(1),
    );

    assert!(rainbow.animate());
    let pixels = strip.borrow().pixels().to_vec();
    for (i, &pixel) in pixels.iter().enumerate() {
        assert_eq!(pixel, wheel(i as u8));
    }
}

#[test]
fn colorwheel_rotates_with_elapsed_time() {
    let strip = RefCell::new(MockStrip::new(8));
    let clock = MockClock::new();
    let mut rainbow = ColorWheel::new(
        &strip,
        &clock,
        Duration::from_millis(50),
        Duration::from_secs(1),
    );

    assert!(rainbow.animate());

    // A quarter period is a quarter turn of the wheel.
    clock.advance_millis(250);
    assert!(rainbow.animate());
    let pixels = strip.borrow().pixels().to_vec();
    for (i, &pixel) in pixels.iter().enumerate() {
        assert_eq!(pixel, wheel(((i + 64) % 255) as u8));
    }
}

#[test]
fn colorwheel_signals_cycle_on_full_revolution() {
    let strip = RefCell::new(MockStrip::new(8));
    let clock = MockClock::new();
    let mut rainbow = ColorWheel::new(
        &strip,
        &clock,
        Duration::from_millis(300),
        Duration::from_secs(1),
    );

    // Five 300ms frames: the accumulator wraps between frame 4 (900ms) and
    // frame 5 (1200ms).
    let mut cycles = 0;
    for _ in 0..5 {
        assert!(rainbow.animate());
        if rainbow.take_cycle_done() {
            cycles += 1;
        }
        clock.advance_millis(300);
    }
    assert_eq!(cycles, 1);
}

#[test]
fn colorwheel_reset_restarts_the_rotation() {
    let strip = RefCell::new(MockStrip::new(8));
    let clock = MockClock::new();
    let mut rainbow = ColorWheel::new(
        &strip,
        &clock,
        Duration::from_millis(50),
        Duration::from_secs(1),
    );

    assert!(rainbow.animate());
    clock.advance_millis(250);
    assert!(rainbow.animate());

    clock.advance_millis(50);
    rainbow.reset();
    assert!(rainbow.animate());
    let pixels = strip.borrow().pixels().to_vec();
    for (i, &pixel) in pixels.iter().enumerate() {
        assert_eq!(pixel, wheel(i as u8));
    }
}
