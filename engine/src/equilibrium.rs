//! Equilibrium results and post-hoc checks
//!
//! The solver does not verify what it returns. For non-degenerate games a
//! returned profile is a Nash equilibrium; for degenerate games callers should
//! confirm with [`Equilibrium::is_nash`].

use crate::game::{dot, Game, Player};

/// Mixed strategy profile returned by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    /// Row player's mixed strategy (length n)
    pub row: Vec<f64>,
    /// Column player's mixed strategy (length m)
    pub col: Vec<f64>,
    /// Label dropped at the start of the path that produced this profile
    pub label: usize,
    /// Pivots performed along that path
    pub pivots: usize,
}

impl Equilibrium {
    /// Strategy of the given player
    pub fn strategy(&self, player: Player) -> &[f64] {
        match player {
            Player::Row => &self.row,
            Player::Column => &self.col,
        }
    }

    /// Consume into (row strategy, column strategy).
    pub fn into_strategies(self) -> (Vec<f64>, Vec<f64>) {
        (self.row, self.col)
    }

    /// Pure strategies played with probability above `tolerance`.
    pub fn support(&self, player: Player, tolerance: f64) -> Vec<usize> {
        self.strategy(player)
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > tolerance)
            .map(|(i, _)| i)
            .collect()
    }

    /// Expected payoffs (row player, column player).
    pub fn payoffs(&self, game: &Game) -> (f64, f64) {
        game.expected_payoffs(&self.row, &self.col)
    }

    /// Both strategies are nonnegative and sum to 1, within `tolerance`.
    pub fn is_distribution(&self, tolerance: f64) -> bool {
        [&self.row, &self.col].iter().all(|s| {
            let sum: f64 = s.iter().sum();
            s.iter().all(|&p| p >= -tolerance) && (sum - 1.0).abs() <= tolerance
        })
    }

    /// Largest gain either player could get by deviating to a pure strategy.
    ///
    /// Zero (up to rounding) exactly at a Nash equilibrium.
    pub fn regret(&self, game: &Game) -> f64 {
        let row_values = game.row_payoffs(&self.col);
        let col_values = game.col_payoffs(&self.row);
        let row_gain = max(&row_values) - dot(&self.row, &row_values);
        let col_gain = max(&col_values) - dot(&col_values, &self.col);
        row_gain.max(col_gain)
    }

    /// Complementary slackness check.
    ///
    /// Every pure strategy played with positive probability must earn the
    /// maximum payoff against the opponent's mixed strategy, for both players.
    pub fn is_nash(&self, game: &Game, tolerance: f64) -> bool {
        if self.row.len() != game.rows() || self.col.len() != game.cols() {
            return false;
        }
        if !self.is_distribution(tolerance) {
            return false;
        }
        best_responds(&self.row, &game.row_payoffs(&self.col), tolerance)
            && best_responds(&self.col, &game.col_payoffs(&self.row), tolerance)
    }
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Every strategy in the support of `mix` attains the best value in `values`.
fn best_responds(mix: &[f64], values: &[f64], tolerance: f64) -> bool {
    let best = max(values);
    mix.iter()
        .zip(values)
        .all(|(&p, &v)| p <= tolerance || best - v <= tolerance)
}
