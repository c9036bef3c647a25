//! The turn loop: one single-pass round over the player list.

use serde::{Deserialize, Serialize};

use crate::core::{Deck, Player};

use super::decision::{Choice, DecisionSource};
use super::events::{EventSink, GameEvent, ScoreEntry};

/// How a single turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The player chose to stop, or their decision source closed.
    Stopped,
    /// A duplicate draw busted the player.
    Busted,
    /// The hand reached seven distinct values.
    Won,
    /// The shared deck ran out mid-turn. Score-neutral: the player
    /// keeps whatever hand they accumulated.
    DeckExhausted,
}

/// Orchestrates one round of Flip 7.
///
/// Owns the single shared deck and the ordered player list. Each player
/// takes exactly one turn, in registration order; the controller pulls
/// choices from a [`DecisionSource`] and reports everything observable
/// through an [`EventSink`].
pub struct RoundController {
    deck: Deck,
    players: Vec<Player>,
}

impl RoundController {
    /// Create a controller for the given deck and players.
    ///
    /// Panics on an empty player list. Validating user input is the
    /// caller's job (see `config`); an empty round has no meaning.
    #[must_use]
    pub fn new(deck: Deck, players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        Self { deck, players }
    }

    /// The players, in registration order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The shared deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Play one full round and return the final report.
    ///
    /// Each player takes a single turn in registration order. The
    /// report order matches registration order exactly; it is never
    /// score-sorted. The sink is closed before returning.
    pub fn play(
        &mut self,
        decisions: &mut dyn DecisionSource,
        events: &mut dyn EventSink,
    ) -> Vec<ScoreEntry> {
        events.publish(&GameEvent::RoundStarted {
            players: self.players.iter().map(|p| p.name().to_string()).collect(),
        });

        for index in 0..self.players.len() {
            self.play_turn(index, decisions, events);
        }

        let scores = self.report();
        events.publish(&GameEvent::FinalScores {
            scores: scores.clone(),
        });
        events.close();
        scores
    }

    /// Final (name, score) pairs in registration order.
    #[must_use]
    pub fn report(&self) -> Vec<ScoreEntry> {
        self.players
            .iter()
            .map(|player| ScoreEntry {
                name: player.name().to_string(),
                score: player.score(),
            })
            .collect()
    }

    /// Run a single player's turn to its terminal state.
    ///
    /// The loop asks for a choice, applies it against the deck and the
    /// player, and ends on the first of: voluntary stop (or closed
    /// source), bust, winning hand, or deck exhaustion.
    pub fn play_turn(
        &mut self,
        player_index: usize,
        decisions: &mut dyn DecisionSource,
        events: &mut dyn EventSink,
    ) -> TurnOutcome {
        let name = self.players[player_index].name().to_string();
        events.publish(&GameEvent::TurnStarted {
            player: name.clone(),
        });

        loop {
            let choice = decisions
                .choose(&name, self.players[player_index].hand())
                .unwrap_or(Choice::Stop);
            events.publish(&GameEvent::ChoiceMade {
                player: name.clone(),
                choice,
            });

            if choice == Choice::Stop {
                events.publish(&GameEvent::PlayerStopped {
                    player: name.clone(),
                });
                return TurnOutcome::Stopped;
            }

            let Some(card) = self.deck.draw() else {
                // No card obtained: the turn ends with the hand as-is,
                // not a bust.
                events.publish(&GameEvent::DeckExhausted {
                    player: name.clone(),
                });
                return TurnOutcome::DeckExhausted;
            };
            events.publish(&GameEvent::CardDrawn {
                player: name.clone(),
                card,
            });

            let player = &mut self.players[player_index];
            player.add_card(card);

            if player.is_busted() {
                events.publish(&GameEvent::PlayerBusted {
                    player: name.clone(),
                    card,
                });
                return TurnOutcome::Busted;
            }
            if player.has_winning_hand() {
                events.publish(&GameEvent::PlayerWon {
                    player: name.clone(),
                });
                return TurnOutcome::Won;
            }
        }
    }
}
