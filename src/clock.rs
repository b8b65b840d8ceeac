//! Millisecond timebase.
//!
//! Time is a wrapping `u32` millisecond counter, the same shape as a
//! microcontroller tick counter. It wraps after roughly 49.7 days; every
//! elapsed-time computation goes through [`elapsed`], which uses wrapping
//! subtraction so a wrap between two samples is harmless.

/// A point on the game clock.
pub type Instant = fugit::TimerInstantU32<1000>;

/// A span on the game clock.
pub type Millis = fugit::MillisDurationU32;

/// Build an [`Instant`] from a raw millisecond count.
#[must_use]
pub const fn at(ms: u32) -> Instant {
    Instant::from_ticks(ms)
}

/// Time elapsed from `since` to `now`, wrap-safe.
#[must_use]
pub const fn elapsed(now: Instant, since: Instant) -> Millis {
    Millis::from_ticks(now.ticks().wrapping_sub(since.ticks()))
}

/// Sample the board clock.
///
/// The 64-bit embassy tick counter is truncated to wrapping milliseconds.
#[cfg(feature = "badge")]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now() -> Instant {
    at(embassy_time::Instant::now().as_millis() as u32)
}
