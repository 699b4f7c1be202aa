//! Integration tests for color helpers.

use palette::Srgb;
use pixel_animations::colors::{
    self, from_packed, scale, wheel, BLUE, GREEN, ORANGE, PURPLE, RED, YELLOW,
};

#[test]
fn wheel_hits_the_primaries() {
    assert_eq!(wheel(0), Srgb::new(255, 0, 0));
    assert_eq!(wheel(85), Srgb::new(0, 255, 0));
    assert_eq!(wheel(170), Srgb::new(0, 0, 255));
}

#[test]
fn wheel_fades_between_primaries() {
    assert_eq!(wheel(1), Srgb::new(252, 3, 0));
    assert_eq!(wheel(86), Srgb::new(0, 252, 3));
    assert_eq!(wheel(255), Srgb::new(255, 0, 0));
}

#[test]
fn from_packed_splits_channels() {
    assert_eq!(from_packed(0xFF8040), Srgb::new(0xFF, 0x80, 0x40));
    assert_eq!(from_packed(0x000000), colors::BLACK);
    assert_eq!(from_packed(0xFF0000), RED);
}

#[test]
fn scale_multiplies_each_channel() {
    let color = Srgb::new(200, 100, 40);
    assert_eq!(scale(color, 0.5), Srgb::new(100, 50, 20));
    assert_eq!(scale(color, 1.0), color);
    assert_eq!(scale(color, 0.0), colors::BLACK);
}

#[test]
fn scale_clamps_the_factor() {
    let color = Srgb::new(200, 100, 40);
    assert_eq!(scale(color, 2.0), color);
    assert_eq!(scale(color, -1.0), colors::BLACK);
}

#[test]
fn rainbow_runs_red_to_purple() {
    assert_eq!(colors::RAINBOW, [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE]);
}
