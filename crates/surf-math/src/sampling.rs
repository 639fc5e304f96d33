//! Evenly spaced sampling and two-argument mesh construction.

use crate::Grid;

/// `n` evenly spaced samples over `[start, end]`.
///
/// Sample `i` is `start + i * step` with `step = (end - start) / (n - 1)`; the
/// last sample is pinned to `end` exactly. `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            samples[n - 1] = end;
            samples
        }
    }
}

/// Broadcast two sample vectors into a pair of coordinate grids.
///
/// Both grids have shape `(ys.len(), xs.len())`. The first grid repeats `xs`
/// along every row (varies along columns); the second repeats `ys` down every
/// column (varies along rows).
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Grid, Grid) {
    let (rows, cols) = (ys.len(), xs.len());
    let x = Grid::from_fn(rows, cols, |_, c| xs[c]);
    let y = Grid::from_fn(rows, cols, |r, _| ys[r]);
    (x, y)
}
