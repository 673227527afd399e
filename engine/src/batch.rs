//! Parallel solving of many independent games
//!
//! Every solve owns its tableau, so games are embarrassingly parallel: the
//! solver is shared by reference and Rayon's work-stealing scheduler spreads
//! the games across threads. Results keep the input order.

use rayon::prelude::*;

use crate::equilibrium::Equilibrium;
use crate::error::SolverResult;
use crate::game::Game;
use crate::solver::LemkeHowson;

/// Outcome counts over a batch of solves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Games with an equilibrium
    pub found: usize,
    /// Games where no path qualified
    pub not_found: usize,
    /// Games that returned an error
    pub failed: usize,
    /// Pivots summed over games with an equilibrium
    pub pivots: usize,
}

impl BatchSummary {
    /// Tally a slice of batch results.
    pub fn from_results(results: &[SolverResult<Option<Equilibrium>>]) -> Self {
        results.iter().fold(BatchSummary::default(), |mut acc, r| {
            match r {
                Ok(Some(eq)) => {
                    acc.found += 1;
                    acc.pivots += eq.pivots;
                }
                Ok(None) => acc.not_found += 1,
                Err(_) => acc.failed += 1,
            }
            acc
        })
    }

    /// Number of games tallied
    pub fn total(&self) -> usize {
        self.found + self.not_found + self.failed
    }
}

/// Solve every game in parallel, one result per game in input order.
pub fn solve_batch(solver: &LemkeHowson, games: &[Game]) -> Vec<SolverResult<Option<Equilibrium>>> {
    games.par_iter().map(|game| solver.solve(game)).collect()
}
