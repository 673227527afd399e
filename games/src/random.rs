//! Seeded random games
//!
//! Payoffs are drawn uniformly from `[low, high)`. Random games are
//! non-degenerate with probability 1, which makes them a good stress input
//! for the pivot walk.

use lemke_engine::{Game, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GameError;

fn random_matrix<R: Rng>(rng: &mut R, rows: usize, cols: usize, low: f64, high: f64) -> Result<Matrix, GameError> {
    let data = (0..rows * cols).map(|_| rng.gen_range(low..high)).collect();
    Ok(Matrix::from_flat(rows, cols, data)?)
}

/// One random rows×cols game.
pub fn random_game<R: Rng>(rng: &mut R, rows: usize, cols: usize, low: f64, high: f64) -> Result<Game, GameError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(GameError::InvalidRange { low, high });
    }
    let a = random_matrix(rng, rows, cols, low, high)?;
    let b = random_matrix(rng, rows, cols, low, high)?;
    Ok(Game::new(a, b)?)
}

/// `count` random games with payoffs in [0, 100), reproducible from `seed`.
pub fn random_games(seed: u64, count: usize, rows: usize, cols: usize) -> Result<Vec<Game>, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_game(&mut rng, rows, cols, 0.0, 100.0)).collect()
}
