//! The draw-or-stop decision seam.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::Card;

/// A player's answer to "draw another card?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Draw one more card from the shared deck.
    Draw,
    /// End the turn voluntarily, keeping the current hand.
    Stop,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Draw => write!(f, "draw"),
            Choice::Stop => write!(f, "stop"),
        }
    }
}

/// Source of draw-or-stop decisions.
///
/// Implementations may block (a human at a prompt) but must resolve to
/// one of the two canonical choices; normalizing raw input is their
/// job, not the controller's. Returning `None` signals the source is
/// closed, which the controller treats as a stop for the current
/// player so a dropped input stream cannot hang the round.
pub trait DecisionSource {
    /// Ask the named player whether to draw, given their current hand.
    fn choose(&mut self, player: &str, hand: &[Card]) -> Option<Choice>;
}

/// Decision source that replays a fixed script.
///
/// Used for automated games and tests. An exhausted script reads as a
/// closed source.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    script: VecDeque<Choice>,
}

impl ScriptedDecisions {
    /// Create a source that yields the given choices in order.
    #[must_use]
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: choices.into_iter().collect(),
        }
    }

    /// Create a source that always answers `Draw` for `count` prompts.
    #[must_use]
    pub fn always_draw(count: usize) -> Self {
        Self::new(std::iter::repeat(Choice::Draw).take(count))
    }

    /// Choices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn choose(&mut self, _player: &str, _hand: &[Card]) -> Option<Choice> {
        self.script.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replay() {
        let mut source = ScriptedDecisions::new([Choice::Draw, Choice::Stop]);

        assert_eq!(source.choose("Alice", &[]), Some(Choice::Draw));
        assert_eq!(source.choose("Alice", &[]), Some(Choice::Stop));
        assert_eq!(source.choose("Alice", &[]), None);
    }

    #[test]
    fn test_empty_script_reads_as_closed() {
        let mut source = ScriptedDecisions::default();
        assert_eq!(source.choose("Alice", &[]), None);
    }

    #[test]
    fn test_always_draw() {
        let mut source = ScriptedDecisions::always_draw(3);
        assert_eq!(source.remaining(), 3);
        assert_eq!(source.choose("Alice", &[]), Some(Choice::Draw));
        assert_eq!(source.remaining(), 2);
    }
}
