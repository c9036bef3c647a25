//! Card values.

use serde::{Deserialize, Serialize};

/// Highest card value in the deck. Values run from 1 to this bound.
pub const MAX_CARD_VALUE: u8 = 12;

/// A single card.
///
/// Flip 7 cards carry only a numeric value. A value `v` appears `v`
/// times in a fresh deck, so the high cards are both more frequent
/// and worth more when they land safely in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    /// Create a card with the given value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
