//! Inclined plane.

use serde::{Deserialize, Serialize};
use surf_math::Domain;

use super::{height_field, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// A plane through the origin rising along x: `z = slope * x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarSurface {
    pub domain: Domain,
    pub slope: f64,
}

impl PlanarSurface {
    pub fn new(domain: Domain, slope: f64) -> Self {
        Self { domain, slope }
    }
}

impl GridSurface for PlanarSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Plane
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn parameter_domain(&self) -> Domain {
        self.domain
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.slope]
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        let s = self.slope;
        height_field(mesh, |x, _| s * x)
    }
}
