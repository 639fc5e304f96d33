//! Rectangular parameter meshes.

use surf_core::SamplingConfig;
use surf_math::{meshgrid, Domain, Grid};

/// A sampling domain paired with a per-axis resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGrid {
    domain: Domain,
    resolution: usize,
}

impl SurfaceGrid {
    pub fn new(domain: Domain, resolution: usize) -> Self {
        Self { domain, resolution }
    }

    pub fn with_config(domain: Domain, config: &SamplingConfig) -> Self {
        Self::new(domain, config.resolution)
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Build the `resolution x resolution` mesh over the domain.
    ///
    /// `u` holds the x-range samples repeated along every row, `v` holds the
    /// y-range samples repeated down every column.
    pub fn mesh(&self) -> SamplingMesh {
        let n = self.resolution;
        let (u, v) = meshgrid(&self.domain.x.samples(n), &self.domain.y.samples(n));
        SamplingMesh { u, v }
    }
}

/// Two equal-shape grids of independent-variable samples.
///
/// For height surfaces these are the X and Y coordinates; for angular
/// surfaces they are the two angle parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingMesh {
    u: Grid,
    v: Grid,
}

impl SamplingMesh {
    pub fn u(&self) -> &Grid {
        &self.u
    }

    pub fn v(&self) -> &Grid {
        &self.v
    }

    pub fn shape(&self) -> (usize, usize) {
        self.u.shape()
    }

    /// Evaluate `f(u, v)` element-wise into a new grid of the mesh's shape.
    pub fn map(&self, f: impl Fn(f64, f64) -> f64) -> Grid {
        Grid::from_fn(self.u.rows(), self.u.cols(), |r, c| {
            f(self.u[(r, c)], self.v[(r, c)])
        })
    }

    pub fn into_grids(self) -> (Grid, Grid) {
        (self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surf_math::Interval;

    #[test]
    fn test_default_mesh_shape_and_corners() {
        let grid = SurfaceGrid::with_config(Domain::default(), &SamplingConfig::default());
        let mesh = grid.mesh();
        assert_eq!(mesh.shape(), (100, 100));
        assert_eq!(mesh.v().shape(), (100, 100));

        assert_eq!(mesh.u()[(0, 0)], -5.0);
        assert_eq!(mesh.u()[(0, 99)], 5.0);
        assert_eq!(mesh.v()[(0, 0)], -5.0);
        assert_eq!(mesh.v()[(99, 0)], 5.0);
    }

    #[test]
    fn test_u_varies_along_columns_only() {
        let domain = Domain::new(Interval::new(0.0, 3.0), Interval::new(10.0, 12.0));
        let mesh = SurfaceGrid::new(domain, 4).mesh();
        for r in 0..4 {
            assert_eq!(mesh.u().row(r), &[0.0, 1.0, 2.0, 3.0]);
        }
        for c in 0..4 {
            assert!((mesh.v()[(1, c)] - 10.0 - 2.0 / 3.0).abs() < 1e-12);
            assert_eq!(mesh.v()[(3, c)], 12.0);
        }
    }

    #[test]
    fn test_map_is_element_wise() {
        let mesh = SurfaceGrid::new(Domain::default(), 5).mesh();
        let sum = mesh.map(|u, v| u + v);
        for r in 0..5 {
            for c in 0..5 {
                assert_eq!(sum[(r, c)], mesh.u()[(r, c)] + mesh.v()[(r, c)]);
            }
        }
    }

    #[test]
    fn test_custom_resolution() {
        let mesh = SurfaceGrid::new(Domain::default(), 7).mesh();
        assert_eq!(mesh.shape(), (7, 7));
        let (u, v) = mesh.into_grids();
        assert_eq!(u.len(), 49);
        assert_eq!(v.len(), 49);
    }
}
