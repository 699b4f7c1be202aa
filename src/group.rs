//! Concurrent composition: all members logically active together.

use crate::animation::Animate;
use heapless::Vec;
use palette::Srgb;

/// A group of animations that are active together — for example a strip of
/// pixels and an onboard LED that should move in step.
///
/// Non-synchronized, every member runs on its own clock and `animate()`
/// forwards to all of them. Synchronized, the first member is the timing
/// leader: its frame gate alone decides when the whole group renders, all
/// members draw in order (leader first) and only then are all buffers
/// presented, so peers never visibly tear against the leader.
///
/// The group's own cycle-done fires whenever the *last* member's render step
/// signals cycle-done.
pub struct AnimationGroup<'a, const N: usize> {
    members: Vec<&'a mut (dyn Animate + 'a), N>,
    sync: bool,
    cycle_pending: bool,
}

impl<'a, const N: usize> AnimationGroup<'a, N> {
    /// Creates a group. With `sync`, members should share the leader's
    /// frame interval for the lock-step to make visual sense.
    pub fn new(members: Vec<&'a mut (dyn Animate + 'a), N>, sync: bool) -> Self {
        Self {
            members,
            sync,
            cycle_pending: false,
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn collect_cycle_done(&mut self) {
        if let Some(last) = self.members.last_mut()
            && last.take_cycle_done()
        {
            self.cycle_pending = true;
        }
    }
}

impl<'a, const N: usize> Animate for AnimationGroup<'a, N> {
    /// Drives all members. Returns true if any member drew a frame.
    fn animate(&mut self) -> bool {
        let fired = if self.sync {
            let due = match self.members.first_mut() {
                Some(leader) => leader.frame_ready(),
                None => false,
            };
            if due {
                // Leader renders first, then peers; all renders complete
                // before any buffer is presented.
                for member in self.members.iter_mut() {
                    member.draw();
                }
                for member in self.members.iter_mut() {
                    member.show();
                }
            }
            due
        } else {
            let mut any = false;
            for member in self.members.iter_mut() {
                any |= member.animate();
            }
            any
        };

        self.collect_cycle_done();
        fired
    }

    fn frame_ready(&mut self) -> bool {
        match self.members.first_mut() {
            Some(leader) => leader.frame_ready(),
            None => false,
        }
    }

    fn draw(&mut self) {
        for member in self.members.iter_mut() {
            member.draw();
        }
    }

    fn show(&mut self) {
        for member in self.members.iter_mut() {
            member.show();
        }
    }

    fn freeze(&mut self) {
        for member in self.members.iter_mut() {
            member.freeze();
        }
    }

    fn resume(&mut self) {
        for member in self.members.iter_mut() {
            member.resume();
        }
    }

    fn reset(&mut self) {
        for member in self.members.iter_mut() {
            member.reset();
        }
    }

    fn fill(&mut self, color: Srgb<u8>) {
        for member in self.members.iter_mut() {
            member.fill(color);
        }
    }

    fn set_color(&mut self, color: Srgb<u8>) {
        for member in self.members.iter_mut() {
            member.set_color(color);
        }
    }

    fn take_cycle_done(&mut self) -> bool {
        core::mem::take(&mut self.cycle_pending)
    }
}
