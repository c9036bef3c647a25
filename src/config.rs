//! Validated game setup.
//!
//! The turn loop itself has no recoverable errors; the one thing that
//! can be wrong is the configuration handed to it. `GameSetup` rejects
//! that before any core type is constructed.

use thiserror::Error;

use crate::core::{Deck, GameRng, Player};
use crate::round::RoundController;

/// Rejected game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one player is required")]
    NoPlayers,
    #[error("player {index} has an empty name")]
    EmptyName { index: usize },
}

/// Who is playing, and how the deck is seeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSetup {
    names: Vec<String>,
    seed: Option<u64>,
}

impl GameSetup {
    /// Validate a player list.
    ///
    /// Rejects an empty list and blank (all-whitespace) names. Names
    /// are otherwise opaque; duplicates are allowed.
    pub fn new(names: Vec<String>) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
        }
        Ok(Self { names, seed: None })
    }

    /// Fix the shuffle seed for a reproducible deal.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The validated player names, in registration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Build the round: a freshly shuffled deck plus one player per name.
    #[must_use]
    pub fn into_controller(self) -> RoundController {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let players = self.names.into_iter().map(Player::new).collect();
        RoundController::new(deck, players)
    }
}
