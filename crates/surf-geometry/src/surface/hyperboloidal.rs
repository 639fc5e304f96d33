//! Saddle surface.

use serde::{Deserialize, Serialize};
use surf_math::Domain;

use super::{height_field, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// `z = (x^2 / a^2 - y^2 / b^2) * c`.
///
/// Zero `a` or `b` is not rejected: the division yields infinities and NaNs,
/// which are passed through to the output grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperboloidalSurface {
    pub domain: Domain,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl HyperboloidalSurface {
    pub fn new(domain: Domain, a: f64, b: f64, c: f64) -> Self {
        Self { domain, a, b, c }
    }
}

impl GridSurface for HyperboloidalSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Hyperboloid
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn parameter_domain(&self) -> Domain {
        self.domain
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        let (a2, b2, c) = (self.a * self.a, self.b * self.b, self.c);
        height_field(mesh, |x, y| (x * x / a2 - y * y / b2) * c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SurfaceGrid;
    use approx::assert_relative_eq;

    #[test]
    fn test_hyperboloid_saddle_signs() {
        let out = HyperboloidalSurface::new(Domain::default(), 1.0, 2.0, 0.5).evaluate();
        // (x=5, y=-5): (25 - 25/4) * 0.5
        assert_relative_eq!(out.z()[(0, 99)], (25.0 - 6.25) * 0.5);

        // Rises along the x-axis, falls along the y-axis
        let mesh = SurfaceGrid::new(Domain::default(), 11).mesh();
        let saddle = HyperboloidalSurface::new(Domain::default(), 1.0, 1.0, 1.0).map_mesh(&mesh);
        assert_eq!(saddle.z()[(5, 5)], 0.0);
        assert_eq!(saddle.z()[(5, 10)], 25.0);
        assert_eq!(saddle.z()[(10, 5)], -25.0);
        assert_eq!(saddle.z()[(0, 0)], 0.0);
    }

    #[test]
    fn test_hyperboloid_zero_axis_propagates_non_finite() {
        let out = HyperboloidalSurface::new(Domain::default(), 0.0, 1.0, 1.0).evaluate();
        assert_eq!(out.shape(), (100, 100));
        // Every x is non-zero at resolution 100, so every entry is infinite
        assert_eq!(out.z().count_non_finite(), 100 * 100);
        assert_eq!(out.non_finite_count(), 100 * 100);
    }

    #[test]
    fn test_hyperboloid_zero_c_is_flat() {
        let out = HyperboloidalSurface::new(Domain::default(), 2.0, 3.0, 0.0).evaluate();
        assert!(out.z().iter().all(|z| z == 0.0));
    }
}
