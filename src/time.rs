//! Clock abstraction for platform-agnostic timing.
//!
//! Animations are driven purely by elapsed wall-clock time. Implement
//! [`Clock`] for your platform's monotonic timer (SysTick, a hardware
//! counter, `std::time::Instant` on hosted targets) and hand a reference to
//! every animation you construct.

/// Nanoseconds per second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Trait for abstracting monotonic time sources.
///
/// The returned counter must be monotonically non-decreasing; wraparound
/// behavior is undefined. A 64-bit nanosecond counter lasts centuries, so
/// implementations backed by narrower hardware timers should widen before
/// returning.
pub trait Clock {
    /// Returns the current monotonic time in nanoseconds.
    fn now_nanos(&self) -> u64;
}

impl<C: Clock> Clock for &C {
    fn now_nanos(&self) -> u64 {
        (*self).now_nanos()
    }
}
