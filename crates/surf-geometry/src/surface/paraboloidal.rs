//! Paraboloid of revolution.

use serde::{Deserialize, Serialize};
use surf_math::Domain;

use super::{height_field, GridSurface};
use crate::grid::SamplingMesh;
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

/// `z = coefficient * (x^2 + y^2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParaboloidalSurface {
    pub domain: Domain,
    pub coefficient: f64,
}

impl ParaboloidalSurface {
    pub fn new(domain: Domain, coefficient: f64) -> Self {
        Self {
            domain,
            coefficient,
        }
    }
}

impl GridSurface for ParaboloidalSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Paraboloid
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn parameter_domain(&self) -> Domain {
        self.domain
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.coefficient]
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        let k = self.coefficient;
        height_field(mesh, |x, y| k * (x * x + y * y))
    }
}
