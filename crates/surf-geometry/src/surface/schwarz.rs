//! Egg-crate approximation of a Schwarz minimal surface.

use serde::{Deserialize, Serialize};
use surf_math::Domain;

use super::{height_field, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// `z = sin(slope * x) * sin(slope * y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchwarzSurface {
    pub domain: Domain,
    pub slope: f64,
}

impl SchwarzSurface {
    pub const DEFAULT_SLOPE: f64 = 1.0;

    pub fn new(domain: Domain, slope: f64) -> Self {
        Self { domain, slope }
    }
}

impl Default for SchwarzSurface {
    fn default() -> Self {
        Self::new(Domain::default(), Self::DEFAULT_SLOPE)
    }
}

impl GridSurface for SchwarzSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::SchwarzSurface
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
        height_field(mesh, |x, y| (s * x).sin() * (s * y).sin())
    }
}
