//! lemke Engine - Nash equilibria of bimatrix games
//!
//! This crate contains the Lemke-Howson solver: payoff matrices and games,
//! the labelled pivoting tableau, the complementary pivot walk, equilibrium
//! checks and parallel batch solving.
//!
//! The engine performs no I/O. Logging goes through the `log` facade.

pub mod batch;
pub mod equilibrium;
pub mod error;
pub mod game;
pub mod matrix;
pub mod settings;
pub mod solver;
pub mod tableau;
pub mod test_games;

pub use batch::{solve_batch, BatchSummary};
pub use equilibrium::Equilibrium;
pub use error::{SolverError, SolverResult};
pub use game::{Game, Player};
pub use matrix::Matrix;
pub use settings::SolverSettings;
pub use solver::{solve, LemkeHowson};
