//! Configuration settings for the Lemke-Howson solver.

use crate::error::SolverError;

/// Default comparison tolerance for pivot eligibility and strategy mass.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Solver settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSettings {
    /// A tableau entry counts as positive only above this value.
    /// Also the minimum strategy mass for a path to yield an equilibrium.
    pub tolerance: f64,

    /// Maximum pivots per path (None = unlimited).
    ///
    /// There is no anti-cycling rule, so a degenerate game can cycle forever
    /// without a cap. Hitting the cap is reported as
    /// [`SolverError::IterationLimit`], never as "not found".
    pub max_pivots: Option<usize>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings { tolerance: DEFAULT_TOLERANCE, max_pivots: None }
    }
}

impl SolverSettings {
    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SolverError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }

    /// Builder-style cap on pivots per path.
    pub fn with_max_pivots(mut self, limit: usize) -> Self {
        self.max_pivots = Some(limit);
        self
    }
}
