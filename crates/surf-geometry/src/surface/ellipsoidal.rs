//! Ellipsoid.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use surf_math::{Domain, Interval};

use super::{parametric, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// An axis-aligned ellipsoid with semi-axes `a`, `b`, `c`, sampled on the same
/// `(u, v)` mesh as [`super::SphericalSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidalSurface {
    pub domain: Domain,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl EllipsoidalSurface {
    pub fn new(domain: Domain, a: f64, b: f64, c: f64) -> Self {
        Self { domain, a, b, c }
    }
}

impl Default for EllipsoidalSurface {
    fn default() -> Self {
        Self::new(Domain::default(), 1.0, 1.0, 1.0)
    }
}

impl GridSurface for EllipsoidalSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Ellipsoid
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn parameter_domain(&self) -> Domain {
        Domain::new(Interval::new(0.0, 2.0 * PI), Interval::new(0.0, PI))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        let (a, b, c) = (self.a, self.b, self.c);
        parametric(
            mesh,
            |u, v| a * u.cos() * v.sin(),
            |u, v| b * u.sin() * v.sin(),
            |_, v| c * v.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SphericalSurface;
    use surf_core::Tolerance;

    #[test]
    fn test_unit_ellipsoid_is_unit_sphere() {
        let e = EllipsoidalSurface::default().evaluate();
        let s = SphericalSurface::new(Domain::default(), 1.0).evaluate();
        assert!(e.approx_eq(&s, Tolerance::exact()));
    }

    #[test]
    fn test_ellipsoid_implicit_equation() {
        let (a, b, c) = (2.0, 0.5, 3.0);
        let out = EllipsoidalSurface::new(Domain::default(), a, b, c).evaluate();
        for p in out.points() {
            let f = (p.x / a).powi(2) + (p.y / b).powi(2) + (p.z / c).powi(2);
            assert!((f - 1.0).abs() < 1e-10, "Point {:?} off ellipsoid: {}", p, f);
        }
    }

    #[test]
    fn test_ellipsoid_extents_follow_semi_axes() {
        let b = EllipsoidalSurface::new(Domain::default(), 2.0, 1.0, 4.0)
            .evaluate()
            .bounds()
            .unwrap();
        assert_eq!(b.max.z, 4.0);
        assert_eq!(b.min.z, -4.0);
        assert!(b.max.x <= 2.0 && b.max.x > 1.99);
    }
}
