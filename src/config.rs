//! Session constants.

use palette::Srgb;

use crate::clock::Millis;

/// Timing, geometry and display settings shared by every lane.
///
/// Fixed for the lifetime of a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Time between scroll ticks.
    pub scroll_interval: Millis,
    /// Time between spawn attempts.
    pub spawn_interval: Millis,
    /// Minimum gap between two recognised presses on the same lane.
    pub debounce_delay: Millis,
    /// Number of pixels a tile covers.
    pub tile_size: usize,
    /// Width of the hit window at the end of each lane.
    pub hit_zone: usize,
    /// Strip brightness, 0–255.
    pub brightness: u8,
    /// Colour every strip is filled with once the game is over.
    pub alert_color: Srgb<u8>,
}

impl GameConfig {
    pub const fn new() -> Self {
        Self {
            scroll_interval: Millis::millis(150),
            spawn_interval: Millis::millis(1500),
            debounce_delay: Millis::millis(200),
            tile_size: 3,
            hit_zone: 2,
            brightness: 50,
            alert_color: Srgb::new(255, 0, 0),
        }
    }

    #[must_use]
    pub const fn with_scroll_interval(mut self, interval: Millis) -> Self {
        self.scroll_interval = interval;
        self
    }

    #[must_use]
    pub const fn with_spawn_interval(mut self, interval: Millis) -> Self {
        self.spawn_interval = interval;
        self
    }

    #[must_use]
    pub const fn with_debounce_delay(mut self, delay: Millis) -> Self {
        self.debounce_delay = delay;
        self
    }

    #[must_use]
    pub const fn with_tile_size(mut self, tile_size: usize) -> Self {
        self.tile_size = tile_size;
        self
    }

    #[must_use]
    pub const fn with_hit_zone(mut self, hit_zone: usize) -> Self {
        self.hit_zone = hit_zone;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_alert_color(mut self, color: Srgb<u8>) -> Self {
        self.alert_color = color;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_game() {
        let config = GameConfig::default();
        assert_eq!(config.scroll_interval.to_millis(), 150);
        assert_eq!(config.spawn_interval.to_millis(), 1500);
        assert_eq!(config.debounce_delay.to_millis(), 200);
        assert_eq!(config.tile_size, 3);
        assert_eq!(config.hit_zone, 2);
        assert_eq!(config.alert_color, Srgb::new(255, 0, 0));
    }

    #[test]
    fn builder_overrides_single_field() {
        let config = GameConfig::new().with_hit_zone(4).with_brightness(255);
        assert_eq!(config.hit_zone, 4);
        assert_eq!(config.brightness, 255);
        assert_eq!(config.tile_size, 3);
    }
}
