//! Small reference games for solver validation and benchmarks
//!
//! Each fixture has a known equilibrium structure:
//!
//!   reference_game       2×2, unique pure equilibrium (row 1, column 0)
//!   trivial_game         1×1
//!   matching_pennies     2×2 zero-sum, unique mixed equilibrium (1/2, 1/2)
//!   rock_paper_scissors  3×3 zero-sum, unique uniform equilibrium
//!   battle_of_the_sexes  2×2 coordination, two pure and one mixed equilibrium
//!   prisoners_dilemma    2×2, defect/defect
//!   three_by_two         3×2 with three equilibria (one pure, two mixed)
//!   all_zero_game        2×2 degenerate, every profile is an equilibrium
//!   tied_rows_game       2×2 degenerate, row player indifferent

use crate::game::Game;
use crate::matrix::Matrix;

fn matrix(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect())
        .expect("fixture matrices are rectangular and finite")
}

fn game(a: &[&[f64]], b: &[&[f64]]) -> Game {
    Game::new(matrix(a), matrix(b)).expect("fixture shapes match")
}

/// A = [[3, 0], [5, 1]], B = [[2, 1], [4, 3]]
pub fn reference_game() -> Game {
    game(&[&[3.0, 0.0], &[5.0, 1.0]], &[&[2.0, 1.0], &[4.0, 3.0]])
}

/// Single strategy for each player
pub fn trivial_game() -> Game {
    game(&[&[1.0]], &[&[1.0]])
}

pub fn matching_pennies() -> Game {
    Game::zero_sum(matrix(&[&[1.0, -1.0], &[-1.0, 1.0]]))
}

pub fn rock_paper_scissors() -> Game {
    Game::zero_sum(matrix(&[&[0.0, -1.0, 1.0], &[1.0, 0.0, -1.0], &[-1.0, 1.0, 0.0]]))
}

pub fn battle_of_the_sexes() -> Game {
    game(&[&[3.0, 0.0], &[0.0, 2.0]], &[&[2.0, 0.0], &[0.0, 3.0]])
}

/// Row 1 / column 1 is "defect"
pub fn prisoners_dilemma() -> Game {
    game(&[&[3.0, 0.0], &[5.0, 1.0]], &[&[3.0, 5.0], &[0.0, 1.0]])
}

/// Equilibria: ((1,0,0),(1,0)), ((0,1/3,2/3),(1/3,2/3)), ((4/5,1/5,0),(2/3,1/3))
pub fn three_by_two() -> Game {
    game(
        &[&[3.0, 3.0], &[2.0, 5.0], &[0.0, 6.0]],
        &[&[3.0, 2.0], &[2.0, 6.0], &[3.0, 1.0]],
    )
}

pub fn all_zero_game() -> Game {
    game(&[&[0.0, 0.0], &[0.0, 0.0]], &[&[0.0, 0.0], &[0.0, 0.0]])
}

/// Row payoffs are constant; the column player matches the row.
pub fn tied_rows_game() -> Game {
    game(&[&[1.0, 1.0], &[1.0, 1.0]], &[&[2.0, 1.0], &[1.0, 2.0]])
}
