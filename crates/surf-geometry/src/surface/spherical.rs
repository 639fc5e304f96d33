//! Sphere.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use surf_math::{Domain, Interval};

use super::{parametric, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// A sphere centered at the origin, parameterized by azimuth `u` in
/// `[0, 2*PI]` and polar angle `v` in `[0, PI]`.
///
/// `P(u, v) = radius * (cos(u)*sin(v), sin(u)*sin(v), cos(v))`
///
/// The rectangular domain is kept for bookkeeping only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphericalSurface {
    pub domain: Domain,
    pub radius: f64,
}

impl SphericalSurface {
    pub fn new(domain: Domain, radius: f64) -> Self {
        Self { domain, radius }
    }
}

impl Default for SphericalSurface {
    fn default() -> Self {
        Self::new(Domain::default(), 1.0)
    }
}

impl GridSurface for SphericalSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Sphere
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn parameter_domain(&self) -> Domain {
        Domain::new(Interval::new(0.0, 2.0 * PI), Interval::new(0.0, PI))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.radius]
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        let r = self.radius;
        parametric(
            mesh,
            |u, v| r * u.cos() * v.sin(),
            |u, v| r * u.sin() * v.sin(),
            |_, v| r * v.cos(),
        )
    }
}
