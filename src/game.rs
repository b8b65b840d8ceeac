//! Game controller.
//!
//! [`GameState`] is the whole model: lanes, score, timers, debounce state and
//! the game-over phase. [`Game`] owns the state together with the hardware
//! collaborators and runs one non-blocking [`tick`](Game::tick) per loop
//! iteration:
//!
//! 1. spawn gate
//! 2. scroll gate: clear, draw, show, then advance every tile
//! 3. button polling and hit resolution, lanes in index order
//!
//! Once the game is over the next tick fills every strip with the alert
//! colour, reports the final score and halts for good.

use alloc::vec::Vec;

use embedded_hal::digital::InputPin;

use crate::{
    ConfigError,
    Debouncer,
    EventSink,
    GameConfig,
    GameEvent,
    Lane,
    LaneSelect,
    PixelStrip,
    SpawnOutcome,
    clock::{
        Instant,
        elapsed,
    },
    input::is_active,
    render,
    spawner,
};

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameOverCause {
    TileEscaped { lane: usize },
    MistimedPress { lane: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Playing,
    /// Over, terminal render still pending.
    GameOver(GameOverCause),
    /// Terminal render done. Nothing happens any more.
    Halted(GameOverCause),
}

impl Phase {
    /// First cause wins.
    const fn end(&mut self, cause: GameOverCause) {
        if let Self::Playing = self {
            *self = Self::GameOver(cause);
        }
    }
}

/// Result of a recognised press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressOutcome {
    Hit { score: u32 },
    /// The lane had a tile outside the hit zone. Ends the game.
    Mistimed { position: usize },
    /// No tile on the lane, or the game is already over.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    lanes: Vec<Lane>,
    debouncers: Vec<Debouncer>,
    score: u32,
    phase: Phase,
    last_scroll: Instant,
    last_spawn: Option<Instant>,
}

impl GameState {
    pub fn new(config: GameConfig, lanes: Vec<Lane>) -> Result<Self, ConfigError> {
        if lanes.is_empty() {
            return Err(ConfigError::NoLanes);
        }
        if config.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }

        let debouncers = lanes.iter().map(|_| Debouncer::new(config.debounce_delay)).collect();
        Ok(Self {
            config,
            lanes,
            debouncers,
            score: 0,
            phase: Phase::Playing,
            last_scroll: Instant::from_ticks(0),
            last_spawn: None,
        })
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn game_over(&self) -> bool {
        !matches!(self.phase, Phase::Playing)
    }

    pub const fn is_halted(&self) -> bool {
        matches!(self.phase, Phase::Halted(_))
    }

    /// Anchor the timers at `now`: scrolling starts one interval later and
    /// the first spawn happens on the next check.
    pub const fn restart_clock(&mut self, now: Instant) {
        self.last_scroll = now;
        self.last_spawn = None;
    }

    /// Check the spawn timer, restarting the interval if it fired.
    pub fn spawn_due(&mut self, now: Instant) -> bool {
        let due = self
            .last_spawn
            .is_none_or(|last| elapsed(now, last) >= self.config.spawn_interval);
        if due {
            self.last_spawn = Some(now);
        }
        due
    }

    /// Check the scroll timer, restarting the interval if it fired.
    pub fn scroll_due(&mut self, now: Instant) -> bool {
        let due = elapsed(now, self.last_scroll) >= self.config.scroll_interval;
        if due {
            self.last_scroll = now;
        }
        due
    }

    pub fn spawn<S, E>(&mut self, picker: &mut S, events: &mut E) -> SpawnOutcome
    where
        S: LaneSelect + ?Sized,
        E: EventSink + ?Sized,
    {
        let outcome = spawner::spawn(&mut self.lanes, picker);
        events.record(match outcome {
            SpawnOutcome::Spawned(lane) => GameEvent::Spawned { lane },
            SpawnOutcome::Blocked(lane) => GameEvent::SpawnBlocked { lane },
        });
        outcome
    }

    /// Move every active tile one step. A tile that leaves its lane ends the
    /// game on this very step.
    pub fn advance<E: EventSink + ?Sized>(&mut self, events: &mut E) {
        for (index, lane) in self.lanes.iter_mut().enumerate() {
            lane.advance();
            if lane.has_escaped() {
                events.record(GameEvent::Escaped { lane: index });
                self.phase.end(GameOverCause::TileEscaped { lane: index });
            }
        }
    }

    /// Feed a button sample through the lane's debouncer.
    pub fn register_press(&mut self, lane: usize, active: bool, now: Instant) -> bool {
        self.debouncers
            .get_mut(lane)
            .is_some_and(|debouncer| debouncer.poll(active, now))
    }

    /// Resolve a recognised press against the lane's tile.
    pub fn press<E: EventSink + ?Sized>(&mut self, lane: usize, events: &mut E) -> PressOutcome {
        if self.game_over() {
            return PressOutcome::Ignored;
        }
        let GameConfig {
            tile_size,
            hit_zone,
            ..
        } = self.config;
        let Some(track) = self.lanes.get_mut(lane) else {
            return PressOutcome::Ignored;
        };
        let Some(position) = track.tile() else {
            return PressOutcome::Ignored;
        };

        if track.in_hit_zone(tile_size, hit_zone) {
            track.clear();
            self.score += 1;
            events.record(GameEvent::Hit {
                lane,
                score: self.score,
            });
            PressOutcome::Hit { score: self.score }
        } else {
            self.phase.end(GameOverCause::MistimedPress { lane });
            events.record(GameEvent::Mistimed { lane, position });
            PressOutcome::Mistimed { position }
        }
    }

    /// Leave the pending game-over phase for the terminal one.
    pub const fn halt(&mut self) {
        if let Phase::GameOver(cause) = self.phase {
            self.phase = Phase::Halted(cause);
        }
    }
}

/// The game loop body, bound to its collaborators.
///
/// - `S`: one LED strip per lane
/// - `B`: one pull-up button per lane
/// - `R`: spawn lane picker
/// - `E`: status sink
pub struct Game<S, B, R, E> {
    state: GameState,
    strips: Vec<S>,
    buttons: Vec<B>,
    picker: R,
    events: E,
}

impl<S, B, R, E> Game<S, B, R, E>
where
    S: PixelStrip,
    B: InputPin,
    R: LaneSelect,
    E: EventSink,
{
    /// Pair lanes with their strips and buttons, index by index.
    pub fn new(
        config: GameConfig,
        lanes: Vec<Lane>,
        strips: Vec<S>,
        buttons: Vec<B>,
        picker: R,
        events: E,
    ) -> Result<Self, ConfigError> {
        let state = GameState::new(config, lanes)?;
        let lanes = state.lanes();

        if strips.len() != lanes.len() || buttons.len() != lanes.len() {
            return Err(ConfigError::LaneCountMismatch {
                lanes: lanes.len(),
                strips: strips.len(),
                buttons: buttons.len(),
            });
        }
        for (index, (lane, strip)) in lanes.iter().zip(&strips).enumerate() {
            if strip.len() < lane.length() {
                return Err(ConfigError::StripTooShort {
                    lane: index,
                    needed: lane.length(),
                    available: strip.len(),
                });
            }
        }

        Ok(Self {
            state,
            strips,
            buttons,
            picker,
            events,
        })
    }

    /// Blank the strips and start the clocks.
    pub fn start(&mut self, now: Instant) {
        let brightness = self.state.config().brightness;
        for strip in &mut self.strips {
            strip.set_brightness(brightness);
            strip.clear();
            strip.show();
        }
        self.state.restart_clock(now);
        self.events.record(GameEvent::Started {
            lanes: self.strips.len(),
        });
    }

    /// Run one loop iteration. Never blocks.
    pub fn tick(&mut self, now: Instant) {
        match self.state.phase() {
            Phase::Playing => {}
            Phase::GameOver(_) => {
                self.show_game_over();
                return;
            }
            Phase::Halted(_) => return,
        }

        if self.state.spawn_due(now) {
            self.state.spawn(&mut self.picker, &mut self.events);
        }

        if self.state.scroll_due(now) {
            self.scroll();
        }

        self.poll_buttons(now);
    }

    /// Draw the tiles where they are, then move them on.
    fn scroll(&mut self) {
        let tile_size = self.state.config().tile_size;
        for (lane, strip) in self.state.lanes().iter().zip(&mut self.strips) {
            strip.clear();
            render::draw(lane, tile_size, strip);
            strip.show();
        }
        self.state.advance(&mut self.events);
    }

    fn poll_buttons(&mut self, now: Instant) {
        for (lane, button) in self.buttons.iter_mut().enumerate() {
            if self.state.game_over() {
                break;
            }
            if self.state.register_press(lane, is_active(button), now) {
                self.state.press(lane, &mut self.events);
            }
        }
    }

    fn show_game_over(&mut self) {
        let alert = self.state.config().alert_color;
        for strip in &mut self.strips {
            strip.fill(alert);
            strip.show();
        }
        self.events.record(GameEvent::FinalScore {
            score: self.state.score(),
        });
        self.state.halt();
    }

    pub const fn state(&self) -> &GameState {
        &self.state
    }

    pub const fn score(&self) -> u32 {
        self.state.score()
    }

    pub const fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// The terminal render has happened; the driver can stop ticking.
    pub const fn is_halted(&self) -> bool {
        self.state.is_halted()
    }

    pub fn strips(&self) -> &[S] {
        &self.strips
    }

    pub const fn events(&self) -> &E {
        &self.events
    }
}
