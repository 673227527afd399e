//! Error types for the equilibrium solver.

use thiserror::Error;

/// Errors that can occur while building a game or walking a pivot path.
///
/// "No equilibrium found" is not an error: `solve` reports it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A payoff matrix has no rows or no columns
    #[error("payoff matrix must have at least one row and one column")]
    EmptyMatrix,

    /// A row has a different length from the first row
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    /// Flat data does not fill the declared shape
    #[error("matrix data has {found} entries, expected {expected}")]
    DataLength { expected: usize, found: usize },

    /// NaN or infinite payoff
    #[error("payoff at ({row}, {col}) is not finite")]
    NonFinitePayoff { row: usize, col: usize },

    /// A and B do not have the same shape
    #[error("payoff shapes differ: A is {a:?}, B is {b:?}")]
    ShapeMismatch { a: (usize, usize), b: (usize, usize) },

    /// Comparison tolerance must be finite and non-negative
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f64),

    /// Starting label is not one of the game's n + m labels
    #[error("label {label} out of range (game has {labels} labels)")]
    LabelOutOfRange { label: usize, labels: usize },

    /// No row has a positive coefficient in the entering column
    #[error("degenerate game: no pivot row for column {column} on path from label {label}")]
    Unbounded { label: usize, column: usize },

    /// The configured pivot cap was reached before the path closed
    #[error("iteration limit of {limit} pivots exceeded on path from label {label}")]
    IterationLimit { label: usize, limit: usize },
}

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
