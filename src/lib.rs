//! # flip7
//!
//! A turn-based implementation of the Flip 7 card game: named players
//! take one press-your-luck turn each against a single shared deck.
//!
//! ## Design Principles
//!
//! 1. **One-way data flow**: the round controller is the only component
//!    that sees more than one player or the whole game state. It asks a
//!    decision source for choices and applies them against the deck and
//!    the active player.
//!
//! 2. **Collaborators behind traits**: draw-or-stop input comes through
//!    [`DecisionSource`] and everything observable leaves through
//!    [`EventSink`], so the core plays identically under a terminal,
//!    a script, or a test harness, with no filesystem access.
//!
//! 3. **Outcomes are values**: bust, win, stop, and deck exhaustion are
//!    modeled states ([`TurnOutcome`]), not errors. Normal play never
//!    returns `Err` or panics.
//!
//! ## Modules
//!
//! - `core`: cards, the 78-card deck, players, deterministic RNG
//! - `round`: the turn loop plus the decision and event seams
//! - `config`: validated game setup
//! - `io`: console front end and the durable event log

pub mod config;
pub mod core;
pub mod io;
pub mod round;

// Re-export commonly used types
pub use crate::core::{Card, Deck, GameRng, Player, DECK_SIZE, MAX_CARD_VALUE, WINNING_HAND_SIZE};

pub use crate::round::{
    Choice, DecisionSource, EventSink, GameEvent, MemorySink, MultiSink, NullSink,
    RoundController, ScoreEntry, ScriptedDecisions, TurnOutcome,
};

pub use crate::config::{ConfigError, GameSetup};
