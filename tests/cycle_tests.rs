//! Integration tests for the color-cycle family: ColorCycle, Blink, Solid.

mod common;
use common::*;

use core::cell::RefCell;
use core::time::Duration;

use pixel_animations::{Animate, AnimationError, Blink, ColorCycle, Solid};

#[test]
fn color_cycle_steps_through_list_and_wraps() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let palette = [RED, GREEN, BLUE];

    let mut cycle =
        ColorCycle::<_, _, 3>::new(&strip, &clock, Duration::from_millis(100), &palette)
            .unwrap();

    assert!(cycle.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == RED));
    assert!(!cycle.take_cycle_done());

    clock.advance_millis(100);
    assert!(cycle.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == GREEN));
    assert!(!cycle.take_cycle_done());

    clock.advance_millis(100);
    assert!(cycle.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == BLUE));
    // Index wrapped back to the first color: one full cycle.
    assert!(cycle.take_cycle_done());
    assert!(!cycle.take_cycle_done());

    clock.advance_millis(100);
    assert!(cycle.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == RED));
}

#[test]
fn color_cycle_rejects_empty_list() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();

    let result = ColorCycle::<_, _, 3>::new(&strip, &clock, Duration::from_millis(100), &[]);
    assert_eq!(result.err(), Some(AnimationError::EmptyPalette));
}

#[test]
fn color_cycle_rejects_oversized_list() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let palette = [RED, GREEN, BLUE];

    let result =
        ColorCycle::<_, _, 2>::new(&strip, &clock, Duration::from_millis(100), &palette);
    assert_eq!(result.err(), Some(AnimationError::CapacityExceeded));
}

#[test]
fn color_cycle_reset_returns_to_first_color() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let palette = [RED, GREEN, BLUE];

    let mut cycle =
        ColorCycle::<_, _, 3>::new(&strip, &clock, Duration::from_millis(100), &palette)
            .unwrap();

    assert!(cycle.animate()); // RED
    clock.advance_millis(100);
    assert!(cycle.animate()); // GREEN

    cycle.reset();
    clock.advance_millis(100);
    assert!(cycle.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == RED));
}

#[test]
fn rainbow_cycle_starts_from_red() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();

    let mut cycle =
        ColorCycle::<_, _, 6>::rainbow(&strip, &clock, Duration::from_millis(100)).unwrap();
    assert!(cycle.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == RED));
}

#[test]
fn blink_alternates_color_and_black() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let mut blink = Blink::new(&strip, &clock, Duration::from_millis(500), BLUE);

    assert!(blink.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == BLUE));
    assert!(!blink.take_cycle_done());

    clock.advance_millis(500);
    assert!(blink.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == BLACK));
    // One on/off pair is one cycle, signalled on the off frame.
    assert!(blink.take_cycle_done());

    clock.advance_millis(500);
    assert!(blink.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == BLUE));
}

#[test]
fn blink_set_color_changes_the_on_frame() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let mut blink = Blink::new(&strip, &clock, Duration::from_millis(500), BLUE);

    assert!(blink.animate()); // on frame, BLUE
    blink.set_color(GREEN);

    clock.advance_millis(500);
    assert!(blink.animate()); // off frame
    assert!(strip.borrow().pixels().iter().all(|&p| p == BLACK));

    clock.advance_millis(500);
    assert!(blink.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == GREEN));
}

#[test]
fn solid_fills_and_never_signals_a_cycle() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let mut solid = Solid::new(&strip, &clock, YELLOW);

    assert!(solid.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == YELLOW));
    assert!(!solid.take_cycle_done());

    for _ in 0..5 {
        clock.advance_millis(1_000);
        assert!(solid.animate());
        assert!(!solid.take_cycle_done());
    }
}

#[test]
fn solid_set_color_takes_effect_next_frame() {
    let strip = RefCell::new(MockStrip::new(4));
    let clock = MockClock::new();
    let mut solid = Solid::new(&strip, &clock, YELLOW);

    assert!(solid.animate());
    solid.set_color(RED);
    clock.advance_millis(1_000);
    assert!(solid.animate());
    assert!(strip.borrow().pixels().iter().all(|&p| p == RED));
}
