//! Console front end: stdin decisions, stdout event display.

use std::io::{self, BufRead, Write};

use crate::core::Card;
use crate::round::{Choice, DecisionSource, EventSink, GameEvent};

/// Asks draw-or-stop questions at a terminal.
///
/// Anything other than a recognizable yes/no answer is re-prompted, so
/// the controller only ever sees the two canonical choices. EOF or a
/// read error reads as a closed source, which the controller treats as
/// a stop.
///
/// Generic over the reader so tests can drive it without a TTY.
pub struct StdinDecisions<R> {
    input: R,
}

impl StdinDecisions<io::StdinLock<'static>> {
    /// Read decisions from the process's stdin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl Default for StdinDecisions<io::StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinDecisions<R> {
    /// Read decisions from an arbitrary buffered reader.
    #[must_use]
    pub fn from_reader(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> DecisionSource for StdinDecisions<R> {
    fn choose(&mut self, player: &str, hand: &[Card]) -> Option<Choice> {
        loop {
            if hand.is_empty() {
                print!("{player}, draw a card? [y/n] ");
            } else {
                let held: Vec<String> = hand.iter().map(Card::to_string).collect();
                print!("{player} (holding {}), draw a card? [y/n] ", held.join(" "));
            }
            let _ = io::stdout().flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {}
                Err(err) => {
                    log::warn!("decision input failed: {err}");
                    return None;
                }
            }

            match parse_choice(line.trim()) {
                Some(choice) => return Some(choice),
                None => println!("please answer y or n"),
            }
        }
    }
}

/// Normalize raw input into a canonical choice.
fn parse_choice(input: &str) -> Option<Choice> {
    match input.to_ascii_lowercase().as_str() {
        "y" | "yes" | "d" | "draw" => Some(Choice::Draw),
        "n" | "no" | "s" | "stop" => Some(Choice::Stop),
        _ => None,
    }
}

/// Renders round events for a human at the terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for ConsoleSink {
    fn publish(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { players } => {
                println!("Flip 7 -- {} at the table\n", players.join(", "));
            }
            GameEvent::TurnStarted { player } => {
                println!("--- {player}'s turn ---");
            }
            // The prompt itself already shows the answer.
            GameEvent::ChoiceMade { .. } => {}
            GameEvent::CardDrawn { player, card } => {
                println!("{player} draws a {card}");
            }
            GameEvent::PlayerBusted { player, card } => {
                println!("{player} busts: {card} was already in hand");
            }
            GameEvent::PlayerWon { player } => {
                println!("{player} wins with seven cards!");
            }
            GameEvent::PlayerStopped { player } => {
                println!("{player} stops");
            }
            GameEvent::DeckExhausted { player } => {
                println!("the deck is empty; {player}'s turn ends");
            }
            GameEvent::FinalScores { scores } => {
                println!("\nFinal scores:");
                for entry in scores {
                    println!("  {}: {} points", entry.name, entry.score);
                }
            }
        }
    }
}
