//! Random tile spawning.

use rand::{
    Rng,
    RngCore,
};

use crate::Lane;

/// Source of spawn lanes.
///
/// Every [`RngCore`] is a uniform picker; seed it once at startup from
/// something unpredictable.
pub trait LaneSelect {
    /// Pick a lane index in `0..lane_count`. `lane_count` is never zero.
    fn pick(&mut self, lane_count: usize) -> usize;
}

impl<R: RngCore> LaneSelect for R {
    fn pick(&mut self, lane_count: usize) -> usize {
        self.random_range(0..lane_count)
    }
}

/// What one spawn attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpawnOutcome {
    Spawned(usize),
    /// The picked lane was occupied. The attempt is dropped, not moved to
    /// another lane.
    Blocked(usize),
}

/// Pick one lane and start a tile there if it is free.
pub fn spawn<S: LaneSelect + ?Sized>(lanes: &mut [Lane], picker: &mut S) -> SpawnOutcome {
    let index = picker.pick(lanes.len());
    match lanes.get_mut(index).map(Lane::spawn) {
        Some(true) => SpawnOutcome::Spawned(index),
        _ => SpawnOutcome::Blocked(index),
    }
}
