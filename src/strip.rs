//! WS2812 lane strip driver using the RMT peripheral.

use alloc::{
    vec,
    vec::Vec,
};

use defmt::error;
use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        Channel,
        PulseCode,
        Tx,
    },
};
use palette::Srgb;

use crate::PixelStrip;

/// One WS2812 strip on its own RMT channel.
///
/// Maintains an in-memory framebuffer that is flushed to hardware
/// with [`show`](PixelStrip::show).
pub struct Ws2812Strip<'a> {
    channel: Option<Channel<'a, Blocking, Tx>>,
    framebuffer: Vec<Srgb<u8>>,
    brightness: u8,
}

impl<'a> Ws2812Strip<'a> {
    /// Take over an RMT channel driving `length` LEDs. All pixels start off.
    pub fn new(channel: Channel<'a, Blocking, Tx>, length: usize) -> Self {
        Self {
            channel: Some(channel),
            framebuffer: vec![Srgb::new(0, 0, 0); length],
            brightness: u8::MAX,
        }
    }

    // ── Internal helpers ────────────────────────────────────────────────

    /// Scale one channel by the strip brightness.
    #[allow(clippy::cast_possible_truncation)]
    const fn dim(&self, value: u8) -> u8 {
        (value as u16 * self.brightness as u16 / u8::MAX as u16) as u8
    }

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        let mut pulses = [PulseCode::default(); 8];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            *pulse = Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0);
        }
        pulses
    }
}

impl PixelStrip for Ws2812Strip<'_> {
    fn len(&self) -> usize {
        self.framebuffer.len()
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn clear(&mut self) {
        self.fill(Srgb::new(0, 0, 0));
    }

    fn set_pixel(&mut self, index: usize, color: Srgb<u8>) {
        if let Some(pixel) = self.framebuffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: Srgb<u8>) {
        self.framebuffer.fill(color);
    }

    /// Blocks for the length of the transmission only. The WS2812 latch gap
    /// is covered by the time between scroll ticks.
    fn show(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        let pulses = self
            .framebuffer
            .iter()
            .flat_map(|color| {
                // WS2812 expects GRB byte order
                [
                    Self::byte_to_pulses(self.dim(color.green)),
                    Self::byte_to_pulses(self.dim(color.red)),
                    Self::byte_to_pulses(self.dim(color.blue)),
                ]
                .into_iter()
                .flatten()
            })
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });
    }
}
