//! Tile → pixel projection.

use palette::Srgb;

use crate::Lane;

/// An addressable LED strip with an in-memory framebuffer.
///
/// Setting pixels only touches the framebuffer; [`show`](Self::show) pushes
/// it to the hardware. Calls are synchronous and infallible as far as the
/// game is concerned: a strip that fails to transmit drops the frame.
pub trait PixelStrip {
    /// Number of pixels on the strip.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Global brightness applied when the framebuffer is pushed, 0–255.
    fn set_brightness(&mut self, level: u8);

    /// Turn every pixel off.
    fn clear(&mut self);

    fn set_pixel(&mut self, index: usize, color: Srgb<u8>);

    /// Fill every pixel with one colour.
    fn fill(&mut self, color: Srgb<u8>) {
        for index in 0..self.len() {
            self.set_pixel(index, color);
        }
    }

    /// Flush the framebuffer to the physical LEDs.
    fn show(&mut self);
}

/// Pixels covered by the lane's tile, clipped to the lane.
///
/// Empty for an inactive lane. A tile partly past the end only yields its
/// in-bounds pixels.
pub fn project(lane: &Lane, tile_size: usize) -> impl Iterator<Item = (usize, Srgb<u8>)> {
    let color = lane.color();
    let length = lane.length();
    lane.tile()
        .into_iter()
        .flat_map(move |start| (start..(start + tile_size).min(length)).map(move |index| (index, color)))
}

/// Write the lane's tile into the strip's framebuffer.
pub fn draw<S: PixelStrip + ?Sized>(lane: &Lane, tile_size: usize, strip: &mut S) {
    for (index, color) in project(lane, tile_size) {
        strip.set_pixel(index, color);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const PINK: Srgb<u8> = Srgb::new(255, 0, 150);

    fn lane_at(length: usize, position: usize) -> Lane {
        let mut lane = Lane::new(length, PINK).unwrap();
        lane.spawn();
        for _ in 0..position {
            lane.advance();
        }
        lane
    }

    fn indices(lane: &Lane) -> Vec<usize> {
        project(lane, 3).map(|(index, _)| index).collect()
    }

    #[test]
    fn empty_lane_projects_nothing() {
        let lane = Lane::new(14, PINK).unwrap();
        assert_eq!(project(&lane, 3).count(), 0);
    }

    #[test]
    fn full_tile_covers_three_pixels() {
        let lane = lane_at(14, 4);
        assert_eq!(indices(&lane), [4, 5, 6]);
        assert!(project(&lane, 3).all(|(_, color)| color == PINK));
    }

    #[test]
    fn tile_is_clipped_at_the_end() {
        assert_eq!(indices(&lane_at(14, 12)), [12, 13]);
        assert_eq!(indices(&lane_at(14, 13)), [13]);
        assert!(indices(&lane_at(14, 14)).is_empty());
    }

    struct Framebuffer(Vec<Srgb<u8>>);

    impl PixelStrip for Framebuffer {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn set_brightness(&mut self, _level: u8) {}

        fn clear(&mut self) {
            self.fill(Srgb::new(0, 0, 0));
        }

        fn set_pixel(&mut self, index: usize, color: Srgb<u8>) {
            self.0[index] = color;
        }

        fn show(&mut self) {}
    }

    #[test]
    fn draw_leaves_other_pixels_alone() {
        let off = Srgb::new(0, 0, 0);
        let mut strip = Framebuffer(alloc::vec![off; 14]);
        draw(&lane_at(14, 0), 3, &mut strip);
        assert_eq!(&strip.0[..4], [PINK, PINK, PINK, off]);
        assert!(strip.0[3..].iter().all(|&pixel| pixel == off));
    }
}
