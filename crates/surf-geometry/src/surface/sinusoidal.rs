//! Radial ripple.

use serde::{Deserialize, Serialize};
use surf_math::Domain;

use super::{height_field, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// Concentric waves: `z = sin(frequency * sqrt(x^2 + y^2))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinusoidalSurface {
    pub domain: Domain,
    pub frequency: f64,
}

impl SinusoidalSurface {
    pub fn new(domain: Domain, frequency: f64) -> Self {
        Self { domain, frequency }
    }
}

impl GridSurface for SinusoidalSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Sinusoid
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn parameter_domain(&self) -> Domain {
        self.domain
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.frequency]
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        let f = self.frequency;
        height_field(mesh, |x, y| (f * (x * x + y * y).sqrt()).sin())
    }
}
