//! Selection dispatch: from a kind name and scalar parameters to a surface.

use surf_core::{Result, SamplingConfig, SurfError, Validate};
use surf_math::Domain;

use crate::kind::SurfaceKind;
use crate::renderable::RenderableSurface;
use crate::surface::{GridSurface, Surface};

/// Largest number of scalar parameters any surface takes.
pub const MAX_PARAMETERS: usize = 3;

/// Construct a surface of `kind` over `domain`.
///
/// `params` may be shorter than the kind's arity; missing trailing values are
/// taken from [`SurfaceKind::default_parameters`]. Fails with
/// [`SurfError::InvalidParameter`] if there are too many parameters or any is
/// non-finite, and with [`SurfError::InvalidDomain`] if the domain is empty,
/// inverted or non-finite.
pub fn construct_kind(kind: SurfaceKind, domain: Domain, params: &[f64]) -> Result<Surface> {
    let arity = kind.arity();
    if params.len() > arity {
        return Err(SurfError::InvalidParameter(format!(
            "{} takes at most {} parameter(s) ({}), got {}",
            kind,
            arity,
            kind.parameter_names().join(", "),
            params.len()
        )));
    }

    let mut filled = kind.default_parameters().to_vec();
    filled[..params.len()].copy_from_slice(params);

    let surface = Surface::from_parameters(kind, domain, &filled);
    surface.validate()?;
    log::debug!("Constructed {} with parameters {:?}", kind, filled);
    Ok(surface)
}

/// Construct a surface from its selector name, x-range, y-range and up to
/// three parameters.
///
/// Unrecognized names fail with [`SurfError::UnknownSurfaceKind`].
pub fn construct(
    kind: &str,
    x_range: (f64, f64),
    y_range: (f64, f64),
    params: &[f64],
) -> Result<Surface> {
    let kind: SurfaceKind = kind.parse()?;
    construct_kind(kind, Domain::from_ranges(x_range, y_range), params)
}

/// A sampling configuration and rendering domain shared by every surface the
/// caller builds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceCatalog {
    pub config: SamplingConfig,
    pub domain: Domain,
}

impl SurfaceCatalog {
    pub fn new(config: SamplingConfig, domain: Domain) -> Result<Self> {
        config.validate()?;
        domain.validate()?;
        Ok(Self { config, domain })
    }

    pub fn kinds(&self) -> &'static [SurfaceKind] {
        &SurfaceKind::ALL
    }

    pub fn build(&self, name: &str, params: &[f64]) -> Result<Surface> {
        construct_kind(name.parse()?, self.domain, params)
    }

    /// Build and evaluate in one step.
    pub fn evaluate(&self, name: &str, params: &[f64]) -> Result<RenderableSurface> {
        Ok(self.build(name, params)?.evaluate_with(&self.config))
    }
}
