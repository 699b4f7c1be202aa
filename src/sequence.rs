//! Sequential composition: one member active at a time.

use core::time::Duration;

use crate::animation::Animate;
use crate::colors;
use crate::time::Clock;
use heapless::Vec;
use palette::Srgb;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Errors from sequence construction and member lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// No members provided.
    EmptySequence,

    /// Member capacity exceeded.
    CapacityExceeded,

    /// Activation index is out of bounds.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of members in the sequence.
        len: usize,
    },

    /// No member with the requested name exists.
    UnknownMember,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::EmptySequence => {
                write!(f, "sequence must have at least one member")
            }
            SequenceError::CapacityExceeded => {
                write!(f, "sequence member capacity exceeded")
            }
            SequenceError::IndexOutOfBounds { index, len } => {
                write!(f, "member index {} out of bounds for {} members", index, len)
            }
            SequenceError::UnknownMember => {
                write!(f, "no member with that name")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}

/// An ordered collection of animations with exactly one active at a time.
///
/// Advances manually ([`next`](AnimationSequence::next),
/// [`activate`](AnimationSequence::activate)) or automatically when an
/// advance interval is configured, optionally choosing the next member at
/// random. Implements [`Animate`], so sequences nest inside groups.
///
/// # Type Parameters
/// * `C` - Clock implementation (drives the auto-advance timer)
/// * `N` - Maximum number of members
pub struct AnimationSequence<'a, C: Clock, const N: usize> {
    members: Vec<&'a mut (dyn Animate + 'a), N>,
    clock: &'a C,
    current: usize,
    advance_interval_ns: Option<u64>,
    last_advance: u64,
    auto_clear: bool,
    clear_color: Srgb<u8>,
    random_order: bool,
    rng: SmallRng,
    color: Option<Srgb<u8>>,
    paused: bool,
    paused_at: u64,
    cycle_pending: bool,
}

impl<'a, C: Clock, const N: usize> AnimationSequence<'a, C, N> {
    /// Creates a new sequence builder.
    pub fn builder(clock: &'a C) -> SequenceBuilder<'a, C, N> {
        SequenceBuilder::new(clock)
    }

    /// Index of the currently active member.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the sequence has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Activates the member at `index`.
    ///
    /// If auto-clear is configured, the newly active member's buffer is
    /// filled with the clear color; if a sequence-wide color override is
    /// set, it is applied to the newly active member.
    pub fn activate(&mut self, index: usize) -> Result<(), SequenceError> {
        if index >= self.members.len() {
            return Err(SequenceError::IndexOutOfBounds {
                index,
                len: self.members.len(),
            });
        }
        self.current = index;

        if self.auto_clear {
            let clear_color = self.clear_color;
            self.members[self.current].fill(clear_color);
        }
        if let Some(color) = self.color {
            self.members[self.current].set_color(color);
        }
        Ok(())
    }

    /// Activates the member registered under `name`.
    pub fn activate_named(&mut self, name: &str) -> Result<(), SequenceError> {
        let index = self
            .members
            .iter()
            .position(|member| member.name() == Some(name))
            .ok_or(SequenceError::UnknownMember)?;
        self.activate(index)
    }

    /// Jumps to the next member, wrapping to the first after the last.
    /// Signals cycle-done exactly on the wrap.
    pub fn next(&mut self) {
        let previous = self.current;
        // Index is always in bounds, so activate cannot fail.
        let _ = self.activate((self.current + 1) % self.members.len());
        if previous > self.current {
            self.cycle_pending = true;
        }
    }

    /// Jumps to a uniformly random member.
    pub fn random(&mut self) {
        let index = self.rng.gen_range(0..self.members.len());
        let _ = self.activate(index);
    }

    /// The currently active member.
    pub fn current_animation(&mut self) -> &mut (dyn Animate + 'a) {
        &mut *self.members[self.current]
    }

    /// Sets a sequence-wide color override, applied to the current member
    /// now and to every member on activation.
    pub fn set_color(&mut self, color: Srgb<u8>) {
        self.color = Some(color);
        self.members[self.current].set_color(color);
    }

    /// The sequence-wide color override, if set.
    pub fn color(&self) -> Option<Srgb<u8>> {
        self.color
    }

    fn auto_advance(&mut self) {
        let Some(interval) = self.advance_interval_ns else {
            return;
        };
        let now = self.clock.now_nanos();
        if now - self.last_advance > interval {
            self.last_advance = now;
            if self.random_order {
                self.random();
            } else {
                self.next();
            }
        }
    }
}

impl<'a, C: Clock, const N: usize> Animate for AnimationSequence<'a, C, N> {
    /// Auto-advances if due, then forwards to the current member.
    fn animate(&mut self) -> bool {
        if !self.paused {
            self.auto_advance();
        }
        self.members[self.current].animate()
    }

    fn frame_ready(&mut self) -> bool {
        self.members[self.current].frame_ready()
    }

    fn draw(&mut self) {
        self.members[self.current].draw();
    }

    fn show(&mut self) {
        self.members[self.current].show();
    }

    /// Freezes the active member and the auto-advance timer.
    fn freeze(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.paused_at = self.clock.now_nanos();
        self.members[self.current].freeze();
    }

    /// Resumes the active member; the auto-advance timer is pushed out by
    /// exactly the paused duration.
    fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.last_advance += self.clock.now_nanos() - self.paused_at;
        self.paused_at = 0;
        self.members[self.current].resume();
    }

    fn reset(&mut self) {
        self.members[self.current].reset();
    }

    fn fill(&mut self, color: Srgb<u8>) {
        self.members[self.current].fill(color);
    }

    fn set_color(&mut self, color: Srgb<u8>) {
        AnimationSequence::set_color(self, color);
    }

    fn take_cycle_done(&mut self) -> bool {
        core::mem::take(&mut self.cycle_pending)
    }
}

/// Builder for constructing validated animation sequences.
pub struct SequenceBuilder<'a, C: Clock, const N: usize> {
    members: Vec<&'a mut (dyn Animate + 'a), N>,
    clock: &'a C,
    advance_interval: Option<Duration>,
    auto_clear: bool,
    clear_color: Srgb<u8>,
    random_order: bool,
}

impl<'a, C: Clock, const N: usize> SequenceBuilder<'a, C, N> {
    /// Creates a new empty builder.
    pub fn new(clock: &'a C) -> Self {
        Self {
            members: Vec::new(),
            clock,
            advance_interval: None,
            auto_clear: false,
            clear_color: colors::BLACK,
            random_order: false,
        }
    }

    /// Appends a member.
    ///
    /// # Errors
    /// * `CapacityExceeded` - more than `N` members
    pub fn member(mut self, member: &'a mut (dyn Animate + 'a)) -> Result<Self, SequenceError> {
        self.members
            .push(member)
            .map_err(|_| SequenceError::CapacityExceeded)?;
        Ok(self)
    }

    /// Advances automatically after this interval. Default is manual
    /// advance only.
    pub fn advance_interval(mut self, interval: Duration) -> Self {
        self.advance_interval = Some(interval);
        self
    }

    /// Fills the buffer with the clear color whenever a member is
    /// activated.
    pub fn auto_clear(mut self, clear: bool) -> Self {
        self.auto_clear = clear;
        self
    }

    /// The color used by auto-clear. Default is black.
    pub fn clear_color(mut self, color: Srgb<u8>) -> Self {
        self.clear_color = color;
        self
    }

    /// Chooses a random member on each advance instead of the next one.
    pub fn random_order(mut self, random: bool) -> Self {
        self.random_order = random;
        self
    }

    /// Builds and validates the sequence.
    ///
    /// # Errors
    /// * `EmptySequence` - no members were added
    pub fn build(self) -> Result<AnimationSequence<'a, C, N>, SequenceError> {
        if self.members.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        let now = self.clock.now_nanos();
        let mut rng = SmallRng::seed_from_u64(now);
        let current = if self.random_order {
            rng.gen_range(0..self.members.len())
        } else {
            0
        };

        Ok(AnimationSequence {
            members: self.members,
            clock: self.clock,
            current,
            advance_interval_ns: self.advance_interval.map(|i| i.as_nanos() as u64),
            last_advance: now,
            auto_clear: self.auto_clear,
            clear_color: self.clear_color,
            random_order: self.random_order,
            rng,
            color: None,
            paused: false,
            paused_at: 0,
            cycle_pending: false,
        })
    }
}
