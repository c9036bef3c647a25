//! Deck composition and draw semantics.

use serde::{Deserialize, Serialize};

use super::card::{Card, MAX_CARD_VALUE};
use super::rng::GameRng;

/// Number of cards in a fresh deck: 1 + 2 + ... + 12.
pub const DECK_SIZE: usize = 78;

/// The shared draw pile.
///
/// A fresh deck holds `v` copies of each value `v` in `1..=12`,
/// 78 cards total. Draws come from the top (the end of the internal
/// vector). An empty deck yields `None` rather than an error; callers
/// treat that as the end of the round's resources, not a fault.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a fresh, unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for value in 1..=MAX_CARD_VALUE {
            for _ in 0..value {
                cards.push(Card::new(value));
            }
        }
        Self { cards }
    }

    /// Build a deck with an explicit draw order.
    ///
    /// The first listed value is drawn first. Intended for scripted
    /// games and tests that need the deck to yield known cards.
    #[must_use]
    pub fn from_draw_order(values: &[u8]) -> Self {
        Self {
            cards: values.iter().rev().copied().map(Card::new).collect(),
        }
    }

    /// Randomize the draw order.
    ///
    /// Only the order changes; the multiset of card values is invariant.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
