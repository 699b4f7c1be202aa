#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Animation`**: timing state (frame gate, pause/resume, cycle events)
//!   paired with a concrete render [`Effect`]
//! - **`Animate`**: the object-safe surface sequences and groups compose over
//! - **`PixelBuffer`**: trait to implement for your LED strip hardware
//! - **`Clock`**: trait to implement for your monotonic timer
//! - **`AnimationSequence`**: one member active at a time, manual or timed
//!   advance
//! - **`AnimationGroup`**: all members active together, optionally
//!   synchronized to the first member's clock
//!
//! The library uses `Srgb<u8>` (0–255 channels) for all color operations.
//! Call `animate()` on the top-level object once per iteration of your main
//! loop; it never blocks and returns whether a frame was drawn.

pub mod animation;
pub mod buffer;
pub mod colors;
pub mod effects;
pub mod generators;
pub mod group;
pub mod sequence;
pub mod time;

pub use animation::{Animate, Animation, AnimationError, Effect, Frame};
pub use buffer::PixelBuffer;
pub use colors::{BLACK, RAINBOW};
pub use effects::{Blink, Chase, ColorCycle, ColorWheel, Comet, Pulse, Solid, Sparkle};
pub use generators::{PeriodTracker, PulseGenerator};
pub use group::AnimationGroup;
pub use sequence::{AnimationSequence, SequenceBuilder, SequenceError};
pub use time::{Clock, NANOS_PER_SECOND};

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;
