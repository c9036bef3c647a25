//! Per-player hand state, bust detection, and scoring.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Hand size that wins the round on the spot.
pub const WINNING_HAND_SIZE: usize = 7;

/// One player's hand and bust state.
///
/// The hand never holds a duplicate value: the first duplicate draw
/// busts the player and is discarded, freezing the hand as it was.
/// Busting is one-way, and a busted player scores zero no matter what
/// the frozen hand holds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    busted: bool,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            busted: false,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards held, in the order they were drawn.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Whether a duplicate draw has busted this player.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.busted
    }

    /// Take a drawn card into the hand.
    ///
    /// A value already held busts the player instead of being added.
    /// Calls after busting are no-ops, so a caller that misses the
    /// bust transition cannot corrupt the frozen hand.
    pub fn add_card(&mut self, card: Card) {
        if self.busted {
            return;
        }
        if self.hand.contains(&card) {
            self.busted = true;
        } else {
            self.hand.push(card);
        }
    }

    /// True when the hand holds exactly seven distinct values.
    #[must_use]
    pub fn has_winning_hand(&self) -> bool {
        self.hand.len() == WINNING_HAND_SIZE
    }

    /// Final score: zero when busted, otherwise the sum of the hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        if self.busted {
            0
        } else {
            self.hand.iter().map(|card| u32::from(card.value())).sum()
        }
    }
}
