use thiserror::Error;

/// Rejected game setup.
///
/// Gameplay itself never fails; these only come out of construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("a game needs at least one lane")]
    NoLanes,
    #[error("lane length must be positive")]
    EmptyLane,
    #[error("tile size must be positive")]
    ZeroTileSize,
    #[error("{lanes} lanes but {strips} strips and {buttons} buttons")]
    LaneCountMismatch {
        lanes: usize,
        strips: usize,
        buttons: usize,
    },
    #[error("strip for lane {lane} has {available} pixels, lane needs {needed}")]
    StripTooShort {
        lane: usize,
        needed: usize,
        available: usize,
    },
}
