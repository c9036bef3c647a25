//! Thin I/O wrappers around the round's collaborator seams.
//!
//! Nothing here contains game logic. `StdinDecisions` turns terminal
//! input into canonical choices, `ConsoleSink` renders events for a
//! human, and `FileLogger` appends them to a per-game log file.

pub mod console;
pub mod logger;

pub use console::{ConsoleSink, StdinDecisions};
pub use logger::{FileLogger, LoggerError};
