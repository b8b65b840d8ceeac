//! # ledtiles
//!
//! A three-lane reflex game for addressable LED strips.
//!
//! Each lane is a WS2812 strip with its own button. Tiles spawn at the start
//! of a random lane and scroll towards the end; the player has to hit the
//! lane's button while the tile is inside the hit zone. A tile that runs off
//! the strip, or a press with bad timing, ends the game.
//!
//! The game core is hardware independent:
//! - **Lanes**: tile position and hit-zone geometry ([`Lane`])
//! - **Input**: per-lane debouncing over `embedded-hal` pins ([`Debouncer`])
//! - **Spawner**: random lane selection ([`LaneSelect`])
//! - **Renderer**: tile → pixel projection onto a [`PixelStrip`]
//! - **Controller**: the non-blocking [`Game::tick`] state machine
//!
//! With the `badge` feature the crate also carries the ESP32-S3 board layer
//! (RMT-driven strips, pull-up buttons, `defmt` status log) and the
//! `piano-tiles` firmware binary.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let mut game = Game::new(GameConfig::default(), lanes, strips, buttons, rng, DefmtLog)?;
//! game.start(clock::now());
//! while !game.is_halted() {
//!     game.tick(clock::now());
//!     embassy_futures::yield_now().await;
//! }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod clock;
mod config;
mod error;
mod event;
mod game;
mod input;
mod lane;
pub mod render;
mod spawner;

#[cfg(feature = "badge")]
mod board;
#[cfg(feature = "badge")]
mod buttons;
#[cfg(feature = "badge")]
mod strip;

pub use clock::{
    Instant,
    Millis,
};
pub use config::GameConfig;
pub use error::ConfigError;
#[cfg(feature = "defmt")]
pub use event::DefmtLog;
pub use event::{
    EventSink,
    GameEvent,
};
pub use game::{
    Game,
    GameOverCause,
    GameState,
    Phase,
    PressOutcome,
};
pub use input::{
    Debouncer,
    is_active,
};
pub use lane::Lane;
pub use render::PixelStrip;
pub use spawner::{
    LaneSelect,
    SpawnOutcome,
};

#[cfg(feature = "badge")]
pub use board::*;
#[cfg(feature = "badge")]
pub use buttons::Buttons;
#[cfg(feature = "badge")]
pub use strip::Ws2812Strip;
