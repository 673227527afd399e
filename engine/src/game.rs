//! Bimatrix game definitions
//!
//! A game pairs two equal-shape payoff matrices. Player 1 picks a row,
//! Player 2 picks a column, and each receives the entry of their own matrix.
//! Games are immutable and separate from solver state (tableau, basis).

use crate::error::SolverError;
use crate::matrix::Matrix;

/// Player in a two-player normal-form game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1, chooses rows of the payoff matrices
    Row,
    /// Player 2, chooses columns of the payoff matrices
    Column,
}

impl Player {
    /// Get the opponent of this player
    pub fn opponent(self) -> Player {
        match self {
            Player::Row => Player::Column,
            Player::Column => Player::Row,
        }
    }
}

/// Two-player normal-form game with payoff matrices A (row player) and B (column player).
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    a: Matrix,
    b: Matrix,
}

impl Game {
    /// Pair two payoff matrices. Both must be n×m.
    pub fn new(a: Matrix, b: Matrix) -> Result<Self, SolverError> {
        if a.shape() != b.shape() {
            return Err(SolverError::ShapeMismatch { a: a.shape(), b: b.shape() });
        }
        Ok(Game { a, b })
    }

    /// Build a game straight from nested row vectors.
    pub fn from_rows(a: Vec<Vec<f64>>, b: Vec<Vec<f64>>) -> Result<Self, SolverError> {
        Self::new(Matrix::from_rows(a)?, Matrix::from_rows(b)?)
    }

    /// Zero-sum game: B = −A.
    pub fn zero_sum(a: Matrix) -> Self {
        let b = a.map(|x| -x);
        Game { a, b }
    }

    /// Symmetric game: B = Aᵗ. A must be square.
    pub fn symmetric(a: Matrix) -> Result<Self, SolverError> {
        let b = a.transpose();
        Self::new(a, b)
    }

    /// Row player's payoff matrix
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    /// Column player's payoff matrix
    pub fn b(&self) -> &Matrix {
        &self.b
    }

    /// Payoff matrix of the given player
    pub fn payoffs(&self, player: Player) -> &Matrix {
        match player {
            Player::Row => &self.a,
            Player::Column => &self.b,
        }
    }

    /// Number of pure strategies of the row player (n)
    pub fn rows(&self) -> usize {
        self.a.rows()
    }

    /// Number of pure strategies of the column player (m)
    pub fn cols(&self) -> usize {
        self.a.cols()
    }

    /// Number of pure strategies of the given player
    pub fn strategies(&self, player: Player) -> usize {
        match player {
            Player::Row => self.rows(),
            Player::Column => self.cols(),
        }
    }

    /// Number of complementary labels (n + m)
    pub fn labels(&self) -> usize {
        self.rows() + self.cols()
    }

    /// The same game seen with the players' roles exchanged: (Bᵗ, Aᵗ).
    ///
    /// An equilibrium (x, y) of `self` is an equilibrium (y, x) of the result.
    pub fn swap_players(&self) -> Game {
        Game { a: self.b.transpose(), b: self.a.transpose() }
    }

    /// Payoff of each row against the column player's mixed strategy: A·y.
    pub fn row_payoffs(&self, y: &[f64]) -> Vec<f64> {
        self.a.mul_vec(y)
    }

    /// Payoff of each column against the row player's mixed strategy: xᵗ·B.
    pub fn col_payoffs(&self, x: &[f64]) -> Vec<f64> {
        self.b.vec_mul(x)
    }

    /// Expected payoffs (row player, column player) of a mixed strategy profile.
    pub fn expected_payoffs(&self, x: &[f64], y: &[f64]) -> (f64, f64) {
        let row = dot(x, &self.row_payoffs(y));
        let col = dot(&self.col_payoffs(x), y);
        (row, col)
    }
}

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(&u, &v)| u * v).sum()
}
