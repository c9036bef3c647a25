//! Core game types: cards, deck, players, RNG.
//!
//! These are the leaf components. Nothing here knows about turns,
//! decisions, or reporting; that lives in `round`.

pub mod card;
pub mod deck;
pub mod player;
pub mod rng;

pub use card::{Card, MAX_CARD_VALUE};
pub use deck::{Deck, DECK_SIZE};
pub use player::{Player, WINNING_HAND_SIZE};
pub use rng::GameRng;
