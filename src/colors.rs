//! Color constants and conversion helpers.
//!
//! All colors in this library are `palette::Srgb<u8>` — three 0–255
//! channels. This module provides the named constants used by the built-in
//! animations, the classic 0..=255 hue wheel, and normalization of packed
//! `0xRRGGBB` integers at the API edge.

use palette::Srgb;

pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const ORANGE: Srgb<u8> = Srgb::new(255, 40, 0);
pub const YELLOW: Srgb<u8> = Srgb::new(255, 150, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const TEAL: Srgb<u8> = Srgb::new(0, 255, 120);
pub const CYAN: Srgb<u8> = Srgb::new(0, 255, 255);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const PURPLE: Srgb<u8> = Srgb::new(180, 0, 255);
pub const MAGENTA: Srgb<u8> = Srgb::new(255, 0, 20);
pub const GOLD: Srgb<u8> = Srgb::new(255, 222, 30);
pub const PINK: Srgb<u8> = Srgb::new(242, 90, 255);
pub const AQUA: Srgb<u8> = Srgb::new(50, 255, 255);
pub const JADE: Srgb<u8> = Srgb::new(0, 255, 40);
pub const AMBER: Srgb<u8> = Srgb::new(255, 100, 0);

/// Default rainbow palette, used by [`ColorCycle`](crate::ColorCycle) when
/// no explicit color list is given.
pub const RAINBOW: [Srgb<u8>; 6] = [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE];

/// The classic hue wheel: maps a position in 0..=255 onto the red-green-blue
/// color circle.
///
/// Positions 0..85 fade red to green, 85..170 green to blue, 170..=255 blue
/// back to red.
pub fn wheel(pos: u8) -> Srgb<u8> {
    let pos = pos as u16;
    if pos < 85 {
        Srgb::new((255 - pos * 3) as u8, (pos * 3) as u8, 0)
    } else if pos < 170 {
        let pos = pos - 85;
        Srgb::new(0, (255 - pos * 3) as u8, (pos * 3) as u8)
    } else {
        let pos = pos - 170;
        Srgb::new((pos * 3) as u8, 0, (255 - pos * 3) as u8)
    }
}

/// Normalizes a packed `0xRRGGBB` integer into an `Srgb<u8>`.
///
/// Use this at the API edge; everything downstream works on the canonical
/// three-channel form.
pub const fn from_packed(value: u32) -> Srgb<u8> {
    Srgb::new(
        (value >> 16 & 0xFF) as u8,
        (value >> 8 & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

/// Scales every channel of `color` by `factor`, clamped to 0.0..=1.0.
pub fn scale(color: Srgb<u8>, factor: f32) -> Srgb<u8> {
    let factor = factor.clamp(0.0, 1.0);
    Srgb::new(
        (color.red as f32 * factor) as u8,
        (color.green as f32 * factor) as u8,
        (color.blue as f32 * factor) as u8,
    )
}
