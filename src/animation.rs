//! Animation core: the shared frame-gate, pause/resume and cycle-event
//! contract every concrete animation builds on.
//!
//! [`Animation`] pairs the timing state with an [`Effect`] that supplies the
//! per-frame render step. [`Animate`] is the object-safe surface that
//! sequences and groups compose over.

use core::cell::RefCell;
use core::time::Duration;

use crate::buffer::PixelBuffer;
use crate::time::Clock;
use palette::Srgb;

/// Errors that can occur when constructing an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// The pixel buffer has fewer pixels than the animation requires.
    StripTooShort {
        /// Minimum number of pixels the animation needs.
        required: usize,
        /// Number of pixels the buffer actually has.
        actual: usize,
    },

    /// An empty color list was supplied.
    EmptyPalette,

    /// A runtime parameter exceeds the const capacity of the animation's
    /// internal storage.
    CapacityExceeded,
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::StripTooShort { required, actual } => {
                write!(
                    f,
                    "pixel buffer too short: animation needs {} pixels, buffer has {}",
                    required, actual
                )
            }
            AnimationError::EmptyPalette => {
                write!(f, "color list must have at least one color")
            }
            AnimationError::CapacityExceeded => {
                write!(f, "animation storage capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}

/// Per-frame render context handed to an [`Effect`].
///
/// Carries the frame timestamp and mutable access to the animation's current
/// color, plus the cycle-completion flag effects raise when they finish one
/// logical pass.
pub struct Frame<'c> {
    now_nanos: u64,
    color: &'c mut Srgb<u8>,
    cycle_done: &'c mut bool,
}

impl Frame<'_> {
    /// The monotonic timestamp of this frame.
    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    /// The animation's current color.
    pub fn color(&self) -> Srgb<u8> {
        *self.color
    }

    /// Replaces the animation's current color without triggering the
    /// recompute hook. Used by effects whose color is derived state (e.g.
    /// `ColorCycle` stepping through its list).
    pub fn set_color(&mut self, color: Srgb<u8>) {
        *self.color = color;
    }

    /// Signals that the effect completed one logical cycle this frame.
    pub fn mark_cycle_done(&mut self) {
        *self.cycle_done = true;
    }
}

/// The per-frame render step of a concrete animation.
///
/// There is deliberately no default `render`: an animation without a render
/// step is a programming error the compiler rejects, not a runtime
/// condition.
pub trait Effect<P: PixelBuffer> {
    /// Renders one frame into `strip`. Called only when the frame gate has
    /// fired (or when a synchronized peer is drawn on its leader's clock).
    fn render(&mut self, strip: &mut P, frame: &mut Frame<'_>);

    /// Called when the animation's color changes, including once at
    /// construction. Effects that cache color-derived tables rebuild them
    /// here.
    fn recompute_color(&mut self, _strip: &mut P, _color: Srgb<u8>) {}

    /// Reinitializes the effect's internal phase to its starting state.
    fn reset(&mut self, _now_nanos: u64) {}
}

/// Object-safe animation surface.
///
/// Implemented by [`Animation`] and by the composing structures
/// ([`AnimationSequence`](crate::AnimationSequence),
/// [`AnimationGroup`](crate::AnimationGroup)), so compositions nest.
pub trait Animate {
    /// Drives the animation from a polling loop. Renders and presents a
    /// frame if one is due, never blocks.
    ///
    /// Returns true if a frame was drawn.
    fn animate(&mut self) -> bool;

    /// Checks the frame gate and, if a frame is due, claims it by advancing
    /// the deadline. Used by synchronized groups to gate a whole group on
    /// one member's clock.
    fn frame_ready(&mut self) -> bool;

    /// Renders one frame without checking the gate and without presenting.
    fn draw(&mut self);

    /// Presents the buffered pixel state.
    fn show(&mut self);

    /// Stops the animation until [`resume`](Animate::resume) is called. Any
    /// overrun past the current deadline is captured and re-applied on
    /// resume, so a pause never accelerates the next frame.
    fn freeze(&mut self);

    /// Resumes a frozen animation.
    fn resume(&mut self);

    /// Reinitializes the animation's internal phase to its starting state.
    /// Does not alter color, pause state, or interval.
    fn reset(&mut self);

    /// One-shot full-buffer fill plus present, independent of the frame
    /// gate.
    fn fill(&mut self, color: Srgb<u8>);

    /// Sets the animation color. A no-op if `color` equals the current color
    /// by value; otherwise triggers the color-recompute hook.
    fn set_color(&mut self, color: Srgb<u8>);

    /// Optional identifier, used for lookup by sequences.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Consumes the latched cycle-completion event, if any.
    fn take_cycle_done(&mut self) -> bool;
}

/// A single animation: timing state plus a concrete render [`Effect`].
///
/// The pixel buffer is shared, not owned — several animations (e.g. the
/// members of a sequence) may render to the same strip, so it is borrowed
/// through a `RefCell` for the duration of each operation.
///
/// # Type Parameters
/// * `P` - Pixel buffer implementation
/// * `C` - Clock implementation
/// * `E` - The per-frame render effect
pub struct Animation<'a, P: PixelBuffer, C: Clock, E: Effect<P>> {
    strip: &'a RefCell<P>,
    clock: &'a C,
    interval_ns: u64,
    color: Srgb<u8>,
    paused: bool,
    time_left_at_pause: u64,
    next_update: u64,
    cycle_pending: bool,
    name: Option<&'a str>,
    effect: E,
}

impl<'a, P: PixelBuffer, C: Clock, E: Effect<P>> Animation<'a, P, C, E> {
    /// Creates an animation from an effect. The first `animate()` call fires
    /// immediately.
    ///
    /// `interval` must be positive.
    pub fn from_effect(
        strip: &'a RefCell<P>,
        clock: &'a C,
        interval: Duration,
        color: Srgb<u8>,
        effect: E,
    ) -> Self {
        let interval_ns = interval.as_nanos() as u64;
        debug_assert!(interval_ns > 0, "frame interval must be positive");

        let mut animation = Self {
            strip,
            clock,
            interval_ns,
            color,
            paused: false,
            time_left_at_pause: 0,
            next_update: clock.now_nanos(),
            cycle_pending: false,
            name: None,
            effect,
        };
        animation
            .effect
            .recompute_color(&mut *strip.borrow_mut(), color);
        animation
    }

    /// Attaches an identifier for sequence lookup.
    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// The current color.
    pub fn color(&self) -> Srgb<u8> {
        self.color
    }

    /// The time between frames.
    pub fn interval(&self) -> Duration {
        Duration::from_nanos(self.interval_ns)
    }

    /// Changes the time between frames. Takes effect from the next fired
    /// frame.
    pub fn set_interval(&mut self, interval: Duration) {
        let interval_ns = interval.as_nanos() as u64;
        debug_assert!(interval_ns > 0, "frame interval must be positive");
        self.interval_ns = interval_ns;
    }

    /// Returns true if the animation is frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn effect(&self) -> &E {
        &self.effect
    }

    pub(crate) fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }
}

impl<P: PixelBuffer, C: Clock, E: Effect<P>> Animate for Animation<'_, P, C, E> {
    fn animate(&mut self) -> bool {
        if !self.frame_ready() {
            return false;
        }
        self.draw();
        self.show();
        true
    }

    fn frame_ready(&mut self) -> bool {
        if self.paused {
            return false;
        }

        let now = self.clock.now_nanos();
        if now < self.next_update {
            return false;
        }

        // Advance from the previous deadline, not from `now`, so late polls
        // inside one interval do not push the schedule. If the deadline has
        // fallen more than one interval behind, re-anchor on `now` instead
        // of bursting catch-up frames.
        let next = self.next_update + self.interval_ns;
        self.next_update = if next > now {
            next
        } else {
            now + self.interval_ns
        };
        true
    }

    fn draw(&mut self) {
        let mut cycle_done = false;
        let mut frame = Frame {
            now_nanos: self.clock.now_nanos(),
            color: &mut self.color,
            cycle_done: &mut cycle_done,
        };
        self.effect
            .render(&mut *self.strip.borrow_mut(), &mut frame);
        if cycle_done {
            self.cycle_pending = true;
        }
    }

    fn show(&mut self) {
        self.strip.borrow_mut().show();
    }

    fn freeze(&mut self) {
        self.paused = true;
        self.time_left_at_pause = self
            .clock
            .now_nanos()
            .saturating_sub(self.next_update);
    }

    fn resume(&mut self) {
        self.next_update = self.clock.now_nanos() + self.time_left_at_pause;
        self.time_left_at_pause = 0;
        self.paused = false;
    }

    fn reset(&mut self) {
        self.effect.reset(self.clock.now_nanos());
    }

    fn fill(&mut self, color: Srgb<u8>) {
        let mut strip = self.strip.borrow_mut();
        strip.fill(color);
        strip.show();
    }

    fn set_color(&mut self, color: Srgb<u8>) {
        if self.color == color {
            return;
        }
        self.color = color;
        self.effect
            .recompute_color(&mut *self.strip.borrow_mut(), color);
    }

    fn name(&self) -> Option<&str> {
        self.name
    }

    fn take_cycle_done(&mut self) -> bool {
        core::mem::take(&mut self.cycle_pending)
    }
}
