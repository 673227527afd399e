//! lemke Games - building bimatrix games for the engine
//!
//! This crate turns user input into [`Game`] values: a plain-text bimatrix
//! format, a catalog of named textbook games, and seeded random games for
//! stress runs and benchmarks.

pub mod catalog;
pub mod error;
pub mod parse;
pub mod random;

pub use catalog::{by_name, NAMES};
pub use error::GameError;
pub use lemke_engine::Game;
pub use parse::{parse_game, read_game, render_game};
pub use random::{random_game, random_games};
