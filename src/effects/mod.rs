//! The built-in per-frame rendering algorithms.
//!
//! Each submodule defines one effect (the render step and its private phase
//! state) plus a type alias over [`Animation`](crate::Animation) with a
//! matching constructor, so users write `Blink::new(..)` rather than wiring
//! effects by hand.

pub mod chase;
pub mod comet;
pub mod cycle;
pub mod pulse;
pub mod sparkle;
pub mod wheel;

pub use chase::{Chase, ChaseEffect};
pub use comet::{Comet, CometEffect};
pub use cycle::{Blink, BlinkEffect, ColorCycle, ColorCycleEffect, Solid, SolidEffect};
pub use pulse::{Pulse, PulseEffect};
pub use sparkle::{Sparkle, SparkleEffect};
pub use wheel::{ColorWheel, ColorWheelEffect};
