//! Status stream.
//!
//! Every gameplay outcome is reported as a [`GameEvent`]. Sinks are
//! infallible: whatever a sink does with an event cannot feed back into the
//! game.

use alloc::vec::Vec;

/// Something worth telling the player about.
///
/// Lane indices are zero-based, in the order lanes were handed to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameEvent {
    Started { lanes: usize },
    Spawned { lane: usize },
    /// The picked lane already had a tile; nothing was spawned this interval.
    SpawnBlocked { lane: usize },
    Hit { lane: usize, score: u32 },
    /// A tile ran off the end of its lane.
    Escaped { lane: usize },
    /// A press landed while the lane's tile was outside the hit zone.
    Mistimed { lane: usize, position: usize },
    FinalScore { score: u32 },
}

/// Receiver for [`GameEvent`]s.
pub trait EventSink {
    fn record(&mut self, event: GameEvent);
}

/// Discard everything.
impl EventSink for () {
    fn record(&mut self, _event: GameEvent) {}
}

/// Keep everything, in order.
impl EventSink for Vec<GameEvent> {
    fn record(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn record(&mut self, event: GameEvent) {
        (**self).record(event);
    }
}

/// Human-readable status over `defmt`.
#[cfg(feature = "defmt")]
#[derive(Debug, Default, Clone, Copy)]
pub struct DefmtLog;

#[cfg(feature = "defmt")]
impl EventSink for DefmtLog {
    fn record(&mut self, event: GameEvent) {
        use defmt::{
            debug,
            info,
            warn,
        };

        // Lanes are numbered from 1 for the player.
        match event {
            GameEvent::Started { lanes } => {
                info!("=== PIANO TILES LED === ({} lanes)", lanes);
                info!("Press a lane's button when its tile reaches the end!");
                info!("Score: 0");
            }
            GameEvent::Spawned { lane } => debug!("Tile spawned on lane {}", lane + 1),
            GameEvent::SpawnBlocked { lane } => debug!("Lane {} busy, spawn skipped", lane + 1),
            GameEvent::Hit { score, .. } => info!("HIT! Score: {}", score),
            GameEvent::Escaped { lane } => warn!("GAME OVER - tile missed on lane {}!", lane + 1),
            GameEvent::Mistimed { lane, position } => {
                warn!("GAME OVER - bad timing on lane {} (tile at {})", lane + 1, position);
            }
            GameEvent::FinalScore { score } => {
                info!("===================");
                info!("FINAL SCORE: {}", score);
                info!("===================");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_keeps_order() {
        let mut events: Vec<GameEvent> = Vec::new();
        let sink = &mut events;
        sink.record(GameEvent::Spawned { lane: 1 });
        sink.record(GameEvent::Hit { lane: 1, score: 1 });
        assert_eq!(
            events,
            [GameEvent::Spawned { lane: 1 }, GameEvent::Hit { lane: 1, score: 1 }]
        );
    }
}
