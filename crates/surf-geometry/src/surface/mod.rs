//! Surface trait and the nine catalog implementations.

mod planar;
mod paraboloidal;
mod sinusoidal;
mod hyperboloidal;
mod schwarz;
mod spherical;
mod mobius;
mod toroidal;
mod ellipsoidal;

use serde::{Deserialize, Serialize};
use surf_core::{Result, SamplingConfig, SurfError, Validate};
use surf_math::Domain;

use crate::grid::{SamplingMesh, SurfaceGrid};
use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;

pub use planar::PlanarSurface;
pub use paraboloidal::ParaboloidalSurface;
pub use sinusoidal::SinusoidalSurface;
pub use hyperboloidal::HyperboloidalSurface;
pub use schwarz::SchwarzSurface;
pub use spherical::SphericalSurface;
pub use mobius::MobiusStrip;
pub use toroidal::ToroidalSurface;
pub use ellipsoidal::EllipsoidalSurface;

/// A surface that can be sampled into coordinate grids.
///
/// Implementations hold only their domain and scalar parameters. Evaluation
/// borrows the surface immutably, so repeated calls return identical grids.
pub trait GridSurface {
    fn kind(&self) -> SurfaceKind;

    /// The rectangular domain the surface was constructed with.
    fn domain(&self) -> &Domain;

    /// The rectangle the sampling mesh is built over: the domain itself for
    /// height surfaces, the angle ranges for angular ones.
    fn parameter_domain(&self) -> Domain;

    /// Scalar parameters, ordered as in [`SurfaceKind::parameter_names`].
    fn parameters(&self) -> Vec<f64>;

    /// Map a sampling mesh over [`GridSurface::parameter_domain`] to `(X, Y, Z)`.
    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface;

    fn evaluate_with(&self, config: &SamplingConfig) -> RenderableSurface {
        log::debug!(
            "Evaluating {} {:?} at resolution {}",
            self.kind(),
            self.parameters(),
            config.resolution
        );
        let mesh = SurfaceGrid::with_config(self.parameter_domain(), config).mesh();
        let out = self.map_mesh(&mesh);
        let non_finite = out.non_finite_count();
        if non_finite > 0 {
            log::warn!(
                "{} produced {} non-finite points out of {}",
                self.kind(),
                non_finite,
                out.x().len()
            );
        }
        out
    }

    /// Evaluate at the default resolution.
    fn evaluate(&self) -> RenderableSurface {
        self.evaluate_with(&SamplingConfig::default())
    }
}

/// Height surface: keep the mesh as X and Y, compute Z element-wise.
fn height_field(mesh: &SamplingMesh, z: impl Fn(f64, f64) -> f64) -> RenderableSurface {
    RenderableSurface::from_grids(mesh.u().clone(), mesh.v().clone(), mesh.map(z))
}

/// Angular surface: compute all three coordinates from the `(u, v)` mesh.
fn parametric(
    mesh: &SamplingMesh,
    x: impl Fn(f64, f64) -> f64,
    y: impl Fn(f64, f64) -> f64,
    z: impl Fn(f64, f64) -> f64,
) -> RenderableSurface {
    RenderableSurface::from_grids(mesh.map(x), mesh.map(y), mesh.map(z))
}

/// Any surface from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Surface {
    Plane(PlanarSurface),
    Paraboloid(ParaboloidalSurface),
    Sinusoid(SinusoidalSurface),
    Hyperboloid(HyperboloidalSurface),
    Sphere(SphericalSurface),
    SchwarzSurface(SchwarzSurface),
    MobiusStrip(MobiusStrip),
    Torus(ToroidalSurface),
    Ellipsoid(EllipsoidalSurface),
}

impl Surface {
    /// Build the variant for `kind` from exactly `kind.arity()` parameters.
    ///
    /// No validation happens here; see [`crate::construct_kind`].
    pub(crate) fn from_parameters(kind: SurfaceKind, domain: Domain, p: &[f64]) -> Self {
        match kind {
            SurfaceKind::Plane => Surface::Plane(PlanarSurface::new(domain, p[0])),
            SurfaceKind::Paraboloid => {
                Surface::Paraboloid(ParaboloidalSurface::new(domain, p[0]))
            }
            SurfaceKind::Sinusoid => Surface::Sinusoid(SinusoidalSurface::new(domain, p[0])),
            SurfaceKind::Hyperboloid => {
                Surface::Hyperboloid(HyperboloidalSurface::new(domain, p[0], p[1], p[2]))
            }
            SurfaceKind::Sphere => Surface::Sphere(SphericalSurface::new(domain, p[0])),
            SurfaceKind::SchwarzSurface => {
                Surface::SchwarzSurface(SchwarzSurface::new(domain, p[0]))
            }
            SurfaceKind::MobiusStrip => Surface::MobiusStrip(MobiusStrip::new(domain, p[0])),
            SurfaceKind::Torus => Surface::Torus(ToroidalSurface::new(domain, p[0], p[1])),
            SurfaceKind::Ellipsoid => {
                Surface::Ellipsoid(EllipsoidalSurface::new(domain, p[0], p[1], p[2]))
            }
        }
    }

    fn inner(&self) -> &dyn GridSurface {
        match self {
            Surface::Plane(s) => s,
            Surface::Paraboloid(s) => s,
            Surface::Sinusoid(s) => s,
            Surface::Hyperboloid(s) => s,
            Surface::Sphere(s) => s,
            Surface::SchwarzSurface(s) => s,
            Surface::MobiusStrip(s) => s,
            Surface::Torus(s) => s,
            Surface::Ellipsoid(s) => s,
        }
    }
}

impl GridSurface for Surface {
    fn kind(&self) -> SurfaceKind {
        self.inner().kind()
    }

    fn domain(&self) -> &Domain {
        self.inner().domain()
    }

    fn parameter_domain(&self) -> Domain {
        self.inner().parameter_domain()
    }

    fn parameters(&self) -> Vec<f64> {
        self.inner().parameters()
    }

    fn map_mesh(&self, mesh: &SamplingMesh) -> RenderableSurface {
        self.inner().map_mesh(mesh)
    }
}

impl Validate for Surface {
    fn validate(&self) -> Result<()> {
        self.domain().validate()?;
        let kind = self.kind();
        for (name, value) in kind.parameter_names().iter().zip(self.parameters()) {
            if !value.is_finite() {
                return Err(SurfError::InvalidParameter(format!(
                    "{} parameter `{}` must be finite, got {}",
                    kind, name, value
                )));
            }
        }
        Ok(())
    }
}
