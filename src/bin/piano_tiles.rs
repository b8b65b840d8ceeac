//! Three-lane LED tiles game.
//!
//! Tiles scroll down three WS2812 strips. Hit a lane's button while its tile
//! is at the end of the strip. A missed tile or a press with bad timing ends
//! the game: every strip turns red and the final score is logged.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::{
    Blocking,
    rmt::{
        Channel,
        Tx,
    },
    rng::{
        Rng,
        TrngSource,
    },
    timer::timg::TimerGroup,
};
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use ledtiles::*;
use rand::{
    SeedableRng,
    rngs::SmallRng,
};

extern crate alloc;

use alloc::vec::Vec;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = ledtiles::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 32 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // The hardware RNG only yields true randomness while an entropy source
    // (here ADC noise) is running, so keep one alive while taking the seed.
    let seed = {
        let _entropy = TrngSource::new(resources.entropy.rng, resources.entropy.adc);
        let rng = Rng::new();
        (u64::from(rng.random()) << 32) | u64::from(rng.random())
    };
    let picker = SmallRng::seed_from_u64(seed);

    let channels: [Channel<'_, Blocking, Tx>; LANE_COUNT] = resources.strips.into();
    let strips: Vec<Ws2812Strip<'_>> = channels
        .into_iter()
        .zip(LANE_LENGTHS)
        .map(|(channel, length)| Ws2812Strip::new(channel, length))
        .collect();
    let buttons = Buttons::from(resources.buttons).into_lanes();

    let lanes = LANE_LENGTHS
        .into_iter()
        .zip(LANE_COLORS)
        .map(|(length, color)| Lane::new(length, color))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let mut game = Game::new(GameConfig::default(), lanes, strips, buttons, picker, DefmtLog).unwrap();

    game.start(clock::now());
    while !game.is_halted() {
        game.tick(clock::now());
        embassy_futures::yield_now().await;
    }

    info!("Game halted, power cycle to play again");
    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
