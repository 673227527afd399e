//! Lemke-Howson complementary pivoting
//!
//! Each path starts from the artificial equilibrium (all slacks basic) and
//! drops one label by bringing the strategy variable with that label into the
//! basis. After every pivot, if the leaving variable carries the dropped label
//! the path is complete; otherwise its complement enters next. The final basis
//! encodes a scaled equilibrium.
//!
//! Pivot choice is a plain minimum-ratio scan with first-row tie-break. There
//! is no lexicographic anti-cycling rule, so degenerate games can cycle; set
//! [`SolverSettings::max_pivots`] to turn that into an error.

use log::{debug, trace, warn};

use crate::equilibrium::Equilibrium;
use crate::error::{SolverError, SolverResult};
use crate::game::Game;
use crate::matrix::Matrix;
use crate::settings::SolverSettings;
use crate::tableau::Tableau;

/// Lemke-Howson solver for bimatrix games.
#[derive(Debug, Clone, Default)]
pub struct LemkeHowson {
    settings: SolverSettings,
}

impl LemkeHowson {
    /// Create a solver, rejecting unusable settings.
    pub fn new(settings: SolverSettings) -> SolverResult<Self> {
        settings.validate()?;
        Ok(LemkeHowson { settings })
    }

    /// Active settings
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Find one equilibrium.
    ///
    /// Tries the row player's labels 0..n in increasing order and returns the
    /// first path that ends with positive mass for both players. `Ok(None)`
    /// means no path qualified.
    pub fn solve(&self, game: &Game) -> SolverResult<Option<Equilibrium>> {
        for label in 0..game.rows() {
            if let Some(eq) = self.solve_from_label(game, label)? {
                debug!(
                    "{}x{} game solved from label {} in {} pivots",
                    game.rows(),
                    game.cols(),
                    label,
                    eq.pivots
                );
                return Ok(Some(eq));
            }
            warn!("path from label {} ended without strategy mass", label);
        }
        debug!("no equilibrium found for {}x{} game", game.rows(), game.cols());
        Ok(None)
    }

    /// Follow the single path that starts by dropping `label` (0..n+m).
    ///
    /// Labels n.. belong to the column player. Different labels may reach
    /// different equilibria.
    pub fn solve_from_label(&self, game: &Game, label: usize) -> SolverResult<Option<Equilibrium>> {
        if label >= game.labels() {
            return Err(SolverError::LabelOutOfRange { label, labels: game.labels() });
        }

        let mut tableau = Tableau::new(game);
        let pivots = self.walk(&mut tableau, label)?;

        let (x, y) = tableau.strategies();
        let row_mass: f64 = x.iter().sum();
        let col_mass: f64 = y.iter().sum();
        if row_mass <= self.settings.tolerance || col_mass <= self.settings.tolerance {
            return Ok(None);
        }

        Ok(Some(Equilibrium {
            row: x.iter().map(|&v| v / row_mass).collect(),
            col: y.iter().map(|&v| v / col_mass).collect(),
            label,
            pivots,
        }))
    }

    /// Pivot until the dropped label leaves the basis. Returns the pivot count.
    fn walk(&self, tableau: &mut Tableau, label: usize) -> SolverResult<usize> {
        let tolerance = self.settings.tolerance;
        let mut entering = label;
        let mut pivots = 0usize;

        loop {
            if let Some(limit) = self.settings.max_pivots {
                if pivots >= limit {
                    return Err(SolverError::IterationLimit { label, limit });
                }
            }

            let row = tableau
                .ratio_test(entering, tolerance)
                .ok_or(SolverError::Unbounded { label, column: entering })?;
            let leaving = tableau.pivot(row, entering);
            pivots += 1;
            trace!(
                "label {} pivot {}: column {} enters at row {}, column {} leaves",
                label,
                pivots,
                entering,
                row,
                leaving
            );

            if tableau.label(leaving) == label {
                return Ok(pivots);
            }
            entering = tableau.complement(leaving);
        }
    }
}

/// Solve the game (A, B) with default settings.
///
/// Returns `Ok(None)` when no equilibrium was found.
pub fn solve(a: &Matrix, b: &Matrix) -> SolverResult<Option<Equilibrium>> {
    let game = Game::new(a.clone(), b.clone())?;
    LemkeHowson::default().solve(&game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_games::*;

    const TOL: f64 = 1e-9;

    fn solve_game(game: &Game) -> Equilibrium {
        LemkeHowson::default().solve(game).unwrap().expect("equilibrium")
    }

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < TOL, "got {:?} want {:?}", got, want);
        }
    }

    #[test]
    fn test_reference_game() {
        let g = reference_game();
        let eq = solve(g.a(), g.b()).unwrap().expect("equilibrium");
        assert!(eq.is_distribution(TOL));
        // Row 1 strictly dominates row 0; column 0 is the best reply to it
        assert_close(&eq.row, &[0.0, 1.0]);
        assert_close(&eq.col, &[1.0, 0.0]);
        assert_eq!(eq.label, 0);
        assert_eq!(eq.pivots, 3);
        assert!(eq.is_nash(&g, TOL));
    }

    #[test]
    fn test_trivial_game() {
        let eq = solve_game(&trivial_game());
        assert_eq!(eq.row, vec![1.0]);
        assert_eq!(eq.col, vec![1.0]);
    }

    #[test]
    fn test_trivial_game_negative_payoffs() {
        let g = Game::from_rows(vec![vec![-4.0]], vec![vec![7.0]]).unwrap();
        let eq = solve_game(&g);
        assert_eq!(eq.row, vec![1.0]);
        assert_eq!(eq.col, vec![1.0]);
    }

    #[test]
    fn test_idempotent() {
        let solver = LemkeHowson::default();
        for g in [reference_game(), matching_pennies(), rock_paper_scissors(), three_by_two()] {
            let first = solver.solve(&g).unwrap().unwrap();
            let second = solver.solve(&g).unwrap().unwrap();
            let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
            assert_eq!(bits(&first.row), bits(&second.row));
            assert_eq!(bits(&first.col), bits(&second.col));
        }
    }

    #[test]
    fn test_matching_pennies_mixed() {
        let g = matching_pennies();
        let eq = solve_game(&g);
        assert_close(&eq.row, &[0.5, 0.5]);
        assert_close(&eq.col, &[0.5, 0.5]);
        assert!(eq.is_nash(&g, TOL));
    }

    #[test]
    fn test_rock_paper_scissors_uniform() {
        let g = rock_paper_scissors();
        let eq = solve_game(&g);
        let third = 1.0 / 3.0;
        assert_close(&eq.row, &[third, third, third]);
        assert_close(&eq.col, &[third, third, third]);
        assert_eq!(eq.pivots, 6);
        assert!(eq.is_nash(&g, TOL));
    }

    #[test]
    fn test_prisoners_dilemma_defects() {
        let eq = solve_game(&prisoners_dilemma());
        assert_close(&eq.row, &[0.0, 1.0]);
        assert_close(&eq.col, &[0.0, 1.0]);
    }

    #[test]
    fn test_battle_of_the_sexes_labels_reach_both_pure_equilibria() {
        let g = battle_of_the_sexes();
        let solver = LemkeHowson::default();
        let first = solver.solve_from_label(&g, 0).unwrap().unwrap();
        let second = solver.solve_from_label(&g, 1).unwrap().unwrap();
        assert_close(&first.row, &[1.0, 0.0]);
        assert_close(&first.col, &[1.0, 0.0]);
        assert_close(&second.row, &[0.0, 1.0]);
        assert_close(&second.col, &[0.0, 1.0]);
        // solve() keeps the first qualifying label
        assert_eq!(solver.solve(&g).unwrap().unwrap(), first);
    }

    #[test]
    fn test_rectangular_game() {
        let g = three_by_two();
        let solver = LemkeHowson::default();
        let eq = solver.solve(&g).unwrap().unwrap();
        assert_close(&eq.row, &[1.0, 0.0, 0.0]);
        assert_close(&eq.col, &[1.0, 0.0]);

        let mixed = solver.solve_from_label(&g, 1).unwrap().unwrap();
        assert_close(&mixed.row, &[0.0, 1.0 / 3.0, 2.0 / 3.0]);
        assert_close(&mixed.col, &[1.0 / 3.0, 2.0 / 3.0]);
        assert!(mixed.is_nash(&g, TOL));

        // Labels from the column player's block are valid starting points too
        let from_col = solver.solve_from_label(&g, 4).unwrap().unwrap();
        assert!(from_col.is_nash(&g, TOL));
    }

    #[test]
    fn test_every_label_reaches_an_equilibrium() {
        let solver = LemkeHowson::default();
        for g in [reference_game(), matching_pennies(), battle_of_the_sexes(), three_by_two()] {
            for label in 0..g.labels() {
                let eq = solver.solve_from_label(&g, label).unwrap().unwrap();
                assert!(eq.is_nash(&g, TOL), "label {} gave {:?}", label, eq);
            }
        }
    }

    #[test]
    fn test_swapping_players_swaps_strategies() {
        let solver = LemkeHowson::default();
        for g in [reference_game(), matching_pennies(), rock_paper_scissors()] {
            let eq = solver.solve(&g).unwrap().unwrap();
            let swapped = solver.solve(&g.swap_players()).unwrap().unwrap();
            assert_close(&swapped.row, &eq.col);
            assert_close(&swapped.col, &eq.row);
        }
    }

    #[test]
    fn test_label_out_of_range() {
        let g = reference_game();
        let err = LemkeHowson::default().solve_from_label(&g, 4).unwrap_err();
        assert_eq!(err, SolverError::LabelOutOfRange { label: 4, labels: 4 });
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        assert!(matches!(solve(&a, &b), Err(SolverError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = SolverSettings { tolerance: -1.0, ..Default::default() };
        assert!(LemkeHowson::new(settings).is_err());
    }

    #[test]
    fn test_iteration_limit_is_an_error() {
        let g = rock_paper_scissors();
        let capped = LemkeHowson::new(SolverSettings::default().with_max_pivots(2)).unwrap();
        assert_eq!(
            capped.solve(&g).unwrap_err(),
            SolverError::IterationLimit { label: 0, limit: 2 }
        );
    }

    #[test]
    fn test_iteration_limit_exactly_enough() {
        let g = reference_game();
        let capped = LemkeHowson::new(SolverSettings::default().with_max_pivots(3)).unwrap();
        let eq = capped.solve(&g).unwrap().unwrap();
        assert_close(&eq.row, &[0.0, 1.0]);
    }

    #[test]
    fn test_no_eligible_pivot_row_is_unbounded() {
        // A tolerance above every coefficient leaves the first column without a pivot row.
        let settings = SolverSettings { tolerance: 1e6, ..Default::default() };
        let solver = LemkeHowson::new(settings).unwrap();
        assert_eq!(
            solver.solve(&reference_game()).unwrap_err(),
            SolverError::Unbounded { label: 0, column: 0 }
        );
    }

    #[test]
    fn test_not_found_when_mass_below_tolerance() {
        // Label 0 closes after two pivots with masses 3/4 and 5/8, and a
        // tolerance of 0.7 refuses to normalize the second.
        let settings = SolverSettings { tolerance: 0.7, ..Default::default() };
        let solver = LemkeHowson::new(settings).unwrap();
        assert_eq!(solver.solve_from_label(&reference_game(), 0).unwrap(), None);
    }

    #[test]
    fn test_payoff_scale_does_not_change_equilibrium() {
        let g = reference_game();
        for factor in [1e12, 1e-12] {
            let scaled = Game::new(g.a().map(|x| x * factor), g.b().map(|x| x * factor)).unwrap();
            let eq = solve_game(&scaled);
            assert_close(&eq.row, &[0.0, 1.0]);
            assert_close(&eq.col, &[1.0, 0.0]);
            assert_eq!(eq.pivots, 3);
        }
    }

    #[test]
    fn test_tiny_positive_payoffs() {
        // Strictly positive but far below the tolerance
        let g = Game::from_rows(
            vec![vec![3e-12, 1e-13], vec![5e-12, 1e-12]],
            vec![vec![2e-12, 1e-12], vec![4e-12, 3e-12]],
        )
        .unwrap();
        let eq = solve_game(&g);
        assert_close(&eq.row, &[0.0, 1.0]);
        assert_close(&eq.col, &[1.0, 0.0]);
    }

    #[test]
    fn test_payoff_range_beyond_f64_max() {
        // max - min overflows f64 for A
        let g = Game::from_rows(vec![vec![-1e308, 1e308]], vec![vec![1.0, 2.0]]).unwrap();
        let eq = solve_game(&g);
        assert_close(&eq.row, &[1.0]);
        assert_close(&eq.col, &[0.0, 1.0]);
        assert!(eq.is_nash(&g, TOL));
    }

    #[test]
    fn test_degenerate_all_zero_game() {
        // Every profile is an equilibrium. Ties in the ratio test resolve to
        // the first row, which lands on the first pure profile.
        let g = all_zero_game();
        let eq = solve_game(&g);
        assert_close(&eq.row, &[1.0, 0.0]);
        assert_close(&eq.col, &[1.0, 0.0]);
        assert!(eq.is_nash(&g, TOL));
    }

    #[test]
    fn test_degenerate_tied_payoffs() {
        // Row player is indifferent between both rows.
        let g = tied_rows_game();
        let eq = solve_game(&g);
        assert_close(&eq.row, &[1.0, 0.0]);
        assert_close(&eq.col, &[1.0, 0.0]);
        assert!(eq.is_nash(&g, TOL));
    }
}
