//! The turn-resolution loop and its collaborator seams.
//!
//! `RoundController` owns the deck and the player list for one round.
//! It pulls draw-or-stop choices from a [`DecisionSource`] and pushes
//! value notifications into an [`EventSink`]; neither collaborator can
//! change the round's outcome.

pub mod controller;
pub mod decision;
pub mod events;

pub use controller::{RoundController, TurnOutcome};
pub use decision::{Choice, DecisionSource, ScriptedDecisions};
pub use events::{EventSink, GameEvent, MemorySink, MultiSink, NullSink, ScoreEntry};
