//! Torus.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use surf_math::{Domain, Interval};

use super::{parametric, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// A torus around the z-axis, parameterized by `u` (major angle) and `v`
/// (minor angle), both in `[0, 2*PI]`.
///
/// `major_radius` is the distance from the origin to the tube center.
/// `minor_radius` is the radius of the tube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToroidalSurface {
    pub domain: Domain,
    pub major_radius: f64,
    pub minor_radius: f64,
}

impl ToroidalSurface {
    pub fn new(domain: Domain, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            domain,
            major_radius,
            minor_radius,
        }
    }
}

impl Default for ToroidalSurface {
    fn default() -> Self {
        Self::new(Domain::default(), 1.0, 0.5)
    }
}

impl GridSurface for ToroidalSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Torus
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn parameter_domain(&self) -> Domain {
        Domain::new(Interval::new(0.0, 2.0 * PI), Interval::new(0.0, 2.0 * PI))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.major_radius, self.minor_radius]
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        let (big_r, r) = (self.major_radius, self.minor_radius);
        parametric(
            mesh,
            |u, v| (big_r + r * v.cos()) * u.cos(),
            |u, v| (big_r + r * v.cos()) * u.sin(),
            |_, v| r * v.sin(),
        )
    }
}
