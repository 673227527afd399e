//! Error types for game construction.

use lemke_engine::SolverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// A token could not be read as a number
    #[error("line {line}: cannot parse {token:?} as a payoff")]
    InvalidNumber { line: usize, token: String },

    /// The text did not contain exactly two matrix blocks
    #[error("expected 2 payoff matrices separated by a blank line, found {0}")]
    BlockCount(usize),

    /// Random payoff range is empty or not finite
    #[error("invalid payoff range [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },

    /// The matrices were read but do not form a valid game
    #[error("invalid game: {0}")]
    Game(#[from] SolverError),

    /// The game file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
