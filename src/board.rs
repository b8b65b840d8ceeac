//! ESP32-S3 board wiring for the three-lane cabinet.

use esp_hal::{
    Blocking,
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    rmt::{
        Channel,
        Rmt,
        Tx,
        TxChannelConfig,
        TxChannelCreator as _,
    },
    rom,
    time::Rate,
};
use palette::Srgb;

/// Number of lanes on the cabinet.
pub const LANE_COUNT: usize = 3;

/// Pixels per lane strip.
pub const LANE_LENGTHS: [usize; LANE_COUNT] = [14, 14, 15];

/// Tile colour per lane: blue, pink, green.
pub const LANE_COLORS: [Srgb<u8>; LANE_COUNT] = [
    Srgb::new(0, 100, 255),
    Srgb::new(255, 0, 150),
    Srgb::new(0, 255, 0),
];

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        strips: StripResources<'d> {
            lane1: GPIO9,
            lane2: GPIO7,
            lane3: GPIO12,
            rmt: RMT,
        },
        buttons: ButtonResources<'d> {
            lane1: GPIO2,
            lane2: GPIO3,
            lane3: GPIO4,
        },
        entropy: EntropyResources<'d> {
            rng: RNG,
            adc: ADC1,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Minimal CPU clock switcher for ESP32-S3.
///
/// Steps through an intermediate frequency before reaching the target,
/// which is required by the hardware.
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Initialise the board and return the raw peripheral set.
///
/// Call this once at the top of `main`, then use [`split_resources!`] to
/// break the peripherals into the strip and button groups.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

// ── Resource → peripheral conversions ───────────────────────────────────────

/// One RMT transmit channel per lane, in lane order.
impl<'a> From<StripResources<'a>> for [Channel<'a, Blocking, Tx>; LANE_COUNT] {
    fn from(res: StripResources<'a>) -> Self {
        let rmt = Rmt::new(res.rmt, Rate::from_mhz(40)).unwrap();
        let tx_config = || TxChannelConfig::default().with_clk_divider(1);
        [
            rmt.channel0.configure_tx(res.lane1, tx_config()).unwrap(),
            rmt.channel1.configure_tx(res.lane2, tx_config()).unwrap(),
            rmt.channel2.configure_tx(res.lane3, tx_config()).unwrap(),
        ]
    }
}
