//! Round event notifications.
//!
//! Events are pure value notifications: sinks observe them for display
//! or durable logging, and nothing a sink does (including failing) can
//! change the round's outcome.

use serde::{Deserialize, Serialize};

use crate::core::Card;

use super::decision::Choice;

/// One line of the final report, in registration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Discrete things that happen during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The round begins with these players, in turn order.
    RoundStarted { players: Vec<String> },
    /// A player's turn begins.
    TurnStarted { player: String },
    /// The player answered a draw-or-stop prompt.
    ChoiceMade { player: String, choice: Choice },
    /// The player drew this card (it may still bust them).
    CardDrawn { player: String, card: Card },
    /// The drawn card duplicated one in hand; the player is out at zero.
    PlayerBusted { player: String, card: Card },
    /// The player's hand reached seven distinct values.
    PlayerWon { player: String },
    /// The player stopped voluntarily (or their decision source closed).
    PlayerStopped { player: String },
    /// The shared deck ran out during this player's turn.
    DeckExhausted { player: String },
    /// The round is over; scores in registration order.
    FinalScores { scores: Vec<ScoreEntry> },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::RoundStarted { players } => {
                write!(f, "round started with {}", players.join(", "))
            }
            GameEvent::TurnStarted { player } => write!(f, "{player}'s turn"),
            GameEvent::ChoiceMade { player, choice } => {
                write!(f, "{player} chooses to {choice}")
            }
            GameEvent::CardDrawn { player, card } => {
                write!(f, "{player} draws a {card}")
            }
            GameEvent::PlayerBusted { player, card } => {
                write!(f, "{player} BUSTS on a duplicate {card}")
            }
            GameEvent::PlayerWon { player } => {
                write!(f, "{player} WINS with seven cards")
            }
            GameEvent::PlayerStopped { player } => write!(f, "{player} stops"),
            GameEvent::DeckExhausted { player } => {
                write!(f, "deck exhausted during {player}'s turn")
            }
            GameEvent::FinalScores { scores } => {
                write!(f, "final scores:")?;
                for entry in scores {
                    write!(f, " {}={}", entry.name, entry.score)?;
                }
                Ok(())
            }
        }
    }
}

/// Sink for round events.
///
/// Lifecycle: open at construction, `publish` per event, `close` once
/// after the round. Delivery failures stay inside the sink; the
/// controller never sees them.
pub trait EventSink {
    /// Deliver one event.
    fn publish(&mut self, event: &GameEvent);

    /// Flush and release any underlying resources.
    ///
    /// Called once when the round is over. Default: nothing to do.
    fn close(&mut self) {}
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: &GameEvent) {}
}

/// Sink that records events in memory.
///
/// Tests use this to assert on the emitted sequence.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Vec<GameEvent>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in delivery order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

impl EventSink for MemorySink {
    fn publish(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Sink that fans out to several others.
///
/// The binary composes the console display and the file logger this way.
#[derive(Default)]
pub struct MultiSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl MultiSink {
    /// Create an empty fan-out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a downstream sink.
    pub fn push(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }
}

impl EventSink for MultiSink {
    fn publish(&mut self, event: &GameEvent) {
        for sink in &mut self.sinks {
            sink.publish(event);
        }
    }

    fn close(&mut self) {
        for sink in &mut self.sinks {
            sink.close();
        }
    }
}
