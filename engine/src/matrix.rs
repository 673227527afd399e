//! Dense row-major payoff matrix
//!
//! Payoffs are stored in a single flat `Vec<f64>` for cache locality, indexed
//! as `data[row * cols + col]`. Matrices are immutable once built.

use std::ops::Index;

use crate::error::SolverError;

/// Dense n×m matrix of payoffs.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from row vectors.
    ///
    /// Fails on an empty matrix, an empty row, ragged rows or a non-finite entry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolverError> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        if n == 0 || m == 0 {
            return Err(SolverError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(n * m);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != m {
                return Err(SolverError::RaggedRow { row: i, expected: m, found: row.len() });
            }
            data.extend(row);
        }
        Self::from_flat(n, m, data)
    }

    /// Build a matrix from row-major data of length `rows * cols`.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, SolverError> {
        if rows == 0 || cols == 0 {
            return Err(SolverError::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(SolverError::DataLength { expected: rows * cols, found: data.len() });
        }
        if let Some(pos) = data.iter().position(|x| !x.is_finite()) {
            return Err(SolverError::NonFinitePayoff { row: pos / cols, col: pos % cols });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at (row, col), or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Smallest entry. Matrices are never empty, so this always exists.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest entry.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Apply `f` entrywise. `f` must keep finite values finite.
    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix { rows: self.rows, cols: self.cols, data: self.data.iter().map(|&x| f(x)).collect() }
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Matrix { rows: self.cols, cols: self.rows, data }
    }

    /// Matrix-vector product `M·v` (v has length `cols`).
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.cols);
        (0..self.rows)
            .map(|i| self.row(i).iter().zip(v).map(|(&a, &b)| a * b).sum())
            .collect()
    }

    /// Vector-matrix product `vᵗ·M` (v has length `rows`).
    pub fn vec_mul(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.rows);
        let mut out = vec![0.0_f64; self.cols];
        for (i, &w) in v.iter().enumerate() {
            for (o, &a) in out.iter_mut().zip(self.row(i)) {
                *o += w * a;
            }
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}
