//! Dense row-major 2-D grids of sampled values.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use surf_core::{Result, SurfError, Tolerance};

/// A dense `rows x cols` array of `f64`, stored row-major.
///
/// Element `(r, c)` lives at `data[r * cols + c]`. Grids are plain owned
/// values: every operation that produces a grid allocates a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Unchecked wire form of [`Grid`]; deserialization goes through [`Grid::new`].
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = SurfError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Grid::new(raw.rows, raw.cols, raw.data)
    }
}

/// Number of cells in a `rows x cols` grid, or `None` if it overflows `usize`.
fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
}

fn checked_cell_count(rows: usize, cols: usize) -> usize {
    match cell_count(rows, cols) {
        Some(n) => n,
        None => panic!("grid shape ({}, {}) overflows usize", rows, cols),
    }
}

impl Grid {
    /// Wrap `data` as a `rows x cols` grid.
    ///
    /// Fails with [`SurfError::ShapeMismatch`] if `data.len() != rows * cols`
    /// or if `rows * cols` overflows.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if cell_count(rows, cols) != Some(data.len()) {
            return Err(SurfError::ShapeMismatch {
                expected: (rows, cols),
                found: (1, data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid by evaluating `f(row, col)` at every cell.
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(checked_cell_count(rows, cols));
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Panics if `rows * cols` overflows `usize`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; checked_cell_count(rows, cols)],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row as a slice. Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Apply `f` element-wise, producing a new grid of the same shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two grids of identical shape element-wise.
    pub fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.check_shape(other)?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Minimum and maximum over the finite entries, or `None` if there are none.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Number of NaN or infinite entries.
    pub fn count_non_finite(&self) -> usize {
        self.data.iter().filter(|v| !v.is_finite()).count()
    }

    /// Element-wise comparison under `tol`. Grids of different shape are never equal.
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| tol.approx_eq(a, b))
    }

    fn check_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(SurfError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({}, {}) out of bounds for shape {:?}",
            row,
            col,
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}
