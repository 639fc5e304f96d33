//! Möbius strip.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use surf_math::{Domain, Interval};

use super::{parametric, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// A Möbius strip of unit center radius.
///
/// The mesh's first parameter is the signed offset `w` across the strip in
/// `[-half_width, half_width]` (varying along columns); the second is the
/// angle `theta` around the center circle in `[0, 2*PI]` (varying along rows).
///
/// `P(w, theta) = ((1 + w/2*cos(theta/2))*cos(theta),
///                 (1 + w/2*cos(theta/2))*sin(theta),
///                 w/2*sin(theta/2))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobiusStrip {
    pub domain: Domain,
    pub half_width: f64,
}

impl MobiusStrip {
    pub fn new(domain: Domain, half_width: f64) -> Self {
        Self { domain, half_width }
    }
}

impl Default for MobiusStrip {
    fn default() -> Self {
        Self::new(Domain::default(), 1.0)
    }
}

impl GridSurface for MobiusStrip {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::MobiusStrip
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn parameter_domain(&self) -> Domain {
        Domain::new(
            Interval::new(-self.half_width, self.half_width),
            Interval::new(0.0, 2.0 * PI),
        )
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.half_width]
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        let radial = |w: f64, theta: f64| 1.0 + w / 2.0 * (theta / 2.0).cos();
        parametric(
            mesh,
            |w, theta| radial(w, theta) * theta.cos(),
            |w, theta| radial(w, theta) * theta.sin(),
            |w, theta| w / 2.0 * (theta / 2.0).sin(),
        )
    }
}
