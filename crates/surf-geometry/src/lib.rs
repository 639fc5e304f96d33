//! surfgrid geometry: the surface catalog and its point-grid evaluators.

pub mod catalog;
pub mod grid;
pub mod kind;
pub mod renderable;
pub mod surface;

pub use catalog::{construct, construct_kind, SurfaceCatalog, MAX_PARAMETERS};
pub use grid::{SamplingMesh, SurfaceGrid};
pub use kind::SurfaceKind;
pub use renderable::RenderableSurface;
pub use surface::{
    EllipsoidalSurface, GridSurface, HyperboloidalSurface, MobiusStrip, ParaboloidalSurface,
    PlanarSurface, SchwarzSurface, SinusoidalSurface, SphericalSurface, Surface, ToroidalSurface,
};
