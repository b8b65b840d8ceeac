//! One scrolling track.

use palette::Srgb;

use crate::ConfigError;

/// A lane holds at most one tile and knows where its hit zone starts.
///
/// Positions count from the spawn end of the strip: a tile is spawned at
/// position 0 and scrolls towards `length`. The stored position is the
/// tile's leading (lowest-index) pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    length: usize,
    tile: Option<usize>,
    color: Srgb<u8>,
}

impl Lane {
    pub const fn new(length: usize, color: Srgb<u8>) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::EmptyLane);
        }
        Ok(Self {
            length,
            tile: None,
            color,
        })
    }

    /// Number of addressable positions.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Position of the active tile, `None` if the lane is empty.
    pub const fn tile(&self) -> Option<usize> {
        self.tile
    }

    pub const fn color(&self) -> Srgb<u8> {
        self.color
    }

    pub const fn is_active(&self) -> bool {
        self.tile.is_some()
    }

    /// Place a fresh tile at position 0.
    ///
    /// Returns `false` and leaves the lane untouched if a tile is already
    /// active.
    pub const fn spawn(&mut self) -> bool {
        if self.tile.is_some() {
            return false;
        }
        self.tile = Some(0);
        true
    }

    /// Move the active tile one position towards the end.
    pub fn advance(&mut self) {
        if let Some(position) = self.tile.as_mut() {
            *position += 1;
        }
    }

    pub const fn clear(&mut self) {
        self.tile = None;
    }

    /// The tile has scrolled past the last position without being hit.
    pub const fn has_escaped(&self) -> bool {
        matches!(self.tile, Some(position) if position >= self.length)
    }

    /// Index of the tile's trailing pixel.
    pub const fn tile_end(&self, tile_size: usize) -> Option<usize> {
        match self.tile {
            Some(position) => Some(position + tile_size.saturating_sub(1)),
            None => None,
        }
    }

    /// First position a tile's trailing pixel has to reach to count as a hit.
    pub const fn hit_zone_start(&self, hit_zone: usize) -> usize {
        self.length.saturating_sub(hit_zone).saturating_sub(1)
    }

    /// Whether a press right now would hit the active tile.
    ///
    /// The window opens once the tile's trailing pixel reaches
    /// [`hit_zone_start`](Self::hit_zone_start) and closes when the leading
    /// pixel leaves the strip.
    pub const fn in_hit_zone(&self, tile_size: usize, hit_zone: usize) -> bool {
        match (self.tile, self.tile_end(tile_size)) {
            (Some(position), Some(end)) => {
                end >= self.hit_zone_start(hit_zone) && position < self.length
            }
            _ => false,
        }
    }
}
