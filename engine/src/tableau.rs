//! Combined Lemke-Howson tableau and Gauss-Jordan pivoting
//!
//! For an n×m game the tableau has n+m rows and 2(n+m)+1 columns:
//!
//! ```text
//!            x (n)    y (m)    r (n)    s (m)    rhs
//!   rows 0..n   0       A'       I        0       1      A'·y + r = 1
//!   rows n..k   B'ᵗ     0        0        I       1      B'ᵗ·x + s = 1
//! ```
//!
//! where k = n + m and A', B' are the payoffs mapped affinely into [1, 2].
//! A positive affine map leaves the equilibria unchanged and keeps every
//! coefficient and strategy value on a fixed scale, so one absolute
//! tolerance works for payoffs of any magnitude.
//! Column c < k is the strategy variable with label c; column k + c is the
//! slack with the same label. Row r starts with its own slack (column k + r)
//! basic, which is the artificial equilibrium every path begins from.

use crate::game::Game;
use crate::matrix::Matrix;

/// Dense working tableau plus the basis vector (one basic column per row).
#[derive(Debug, Clone)]
pub struct Tableau {
    n: usize,
    m: usize,
    width: usize,
    data: Vec<f64>,
    basis: Vec<usize>,
    /// Copy of the pivot row, reused across pivots
    scratch: Vec<f64>,
}

/// Map `payoffs` into [1, 2] by a positive affine transformation.
///
/// Entries are first divided by the largest magnitude so the range
/// `max - min` cannot overflow. A constant matrix maps to all ones.
pub(crate) fn normalized(payoffs: &Matrix) -> Matrix {
    let min = payoffs.min();
    let max = payoffs.max();
    let scale = min.abs().max(max.abs());
    if scale == 0.0 {
        return payoffs.map(|_| 1.0);
    }
    let lo = min / scale;
    let range = max / scale - lo;
    if range <= 0.0 {
        return payoffs.map(|_| 1.0);
    }
    payoffs.map(|x| 1.0 + ((x / scale - lo) / range).clamp(0.0, 1.0))
}

impl Tableau {
    /// Build the initial tableau with every slack basic.
    pub fn new(game: &Game) -> Self {
        let n = game.rows();
        let m = game.cols();
        let k = n + m;
        let width = 2 * k + 1;
        let mut data = vec![0.0_f64; k * width];

        let a = normalized(game.a());
        let b = normalized(game.b());

        for i in 0..n {
            let row = &mut data[i * width..(i + 1) * width];
            for j in 0..m {
                row[n + j] = a[(i, j)];
            }
            row[k + i] = 1.0;
            row[2 * k] = 1.0;
        }
        for j in 0..m {
            let row = &mut data[(n + j) * width..(n + j + 1) * width];
            for i in 0..n {
                row[i] = b[(i, j)];
            }
            row[k + n + j] = 1.0;
            row[2 * k] = 1.0;
        }

        let basis = (k..2 * k).collect();
        Tableau { n, m, width, data, basis, scratch: vec![0.0; width] }
    }

    /// Number of rows (n + m)
    pub fn rows(&self) -> usize {
        self.n + self.m
    }

    /// Number of columns including the right-hand side
    pub fn width(&self) -> usize {
        self.width
    }

    /// Index of the right-hand-side column
    pub fn rhs_col(&self) -> usize {
        self.width - 1
    }

    /// Entry at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    /// Basic column of every row
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Label carried by a variable column.
    pub fn label(&self, col: usize) -> usize {
        let k = self.rows();
        if col < k {
            col
        } else {
            col - k
        }
    }

    /// The other variable with the same label (strategy <-> slack).
    pub fn complement(&self, col: usize) -> usize {
        let k = self.rows();
        if col < k {
            col + k
        } else {
            col - k
        }
    }

    /// Minimum-ratio test on `col`.
    ///
    /// Among rows whose coefficient exceeds `tolerance`, returns the row
    /// minimizing `rhs / coefficient`. Ratios within `tolerance` of the
    /// current minimum count as ties, and ties keep the first row in row order.
    /// None when no row is eligible.
    pub fn ratio_test(&self, col: usize, tolerance: f64) -> Option<usize> {
        let rhs = self.rhs_col();
        let mut best: Option<(usize, f64)> = None;
        for row in 0..self.rows() {
            let coef = self.get(row, col);
            if coef <= tolerance {
                continue;
            }
            let ratio = self.get(row, rhs) / coef;
            match best {
                Some((_, min)) if ratio >= min - tolerance => {}
                _ => best = Some((row, ratio)),
            }
        }
        best.map(|(row, _)| row)
    }

    /// Gauss-Jordan pivot on (row, col): scale the pivot row so the pivot is 1,
    /// then clear `col` from every other row. `col` becomes basic in `row`.
    ///
    /// Returns the column that left the basis. The pivot entry must be nonzero.
    pub fn pivot(&mut self, row: usize, col: usize) -> usize {
        let w = self.width;
        let pivot_value = self.data[row * w + col];
        debug_assert!(pivot_value != 0.0, "zero pivot at ({}, {})", row, col);

        for (dst, &src) in self.scratch.iter_mut().zip(&self.data[row * w..(row + 1) * w]) {
            *dst = src / pivot_value;
        }
        self.scratch[col] = 1.0;
        self.data[row * w..(row + 1) * w].copy_from_slice(&self.scratch);

        for r in 0..self.rows() {
            if r == row {
                continue;
            }
            let factor = self.data[r * w + col];
            if factor == 0.0 {
                continue;
            }
            let target = &mut self.data[r * w..(r + 1) * w];
            for (t, &p) in target.iter_mut().zip(&self.scratch) {
                *t -= factor * p;
            }
            target[col] = 0.0;
        }

        std::mem::replace(&mut self.basis[row], col)
    }

    /// Current value of a variable: its row's right-hand side when basic, else 0.
    pub fn value(&self, col: usize) -> f64 {
        let rhs = self.rhs_col();
        self.basis
            .iter()
            .position(|&b| b == col)
            .map_or(0.0, |row| self.get(row, rhs))
    }

    /// Unnormalized strategy variables (x, y) read from the basis.
    pub fn strategies(&self) -> (Vec<f64>, Vec<f64>) {
        let x = (0..self.n).map(|i| self.value(i)).collect();
        let y = (0..self.m).map(|j| self.value(self.n + j)).collect();
        (x, y)
    }
}
