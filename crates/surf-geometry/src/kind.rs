//! The closed set of surface kinds and their selector names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use surf_core::SurfError;

/// One entry of the surface catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Plane,
    Paraboloid,
    Sinusoid,
    Hyperboloid,
    Sphere,
    SchwarzSurface,
    MobiusStrip,
    Torus,
    Ellipsoid,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 9] = [
        SurfaceKind::Plane,
        SurfaceKind::Paraboloid,
        SurfaceKind::Sinusoid,
        SurfaceKind::Hyperboloid,
        SurfaceKind::Sphere,
        SurfaceKind::SchwarzSurface,
        SurfaceKind::MobiusStrip,
        SurfaceKind::Torus,
        SurfaceKind::Ellipsoid,
    ];

    /// Canonical selector name.
    pub fn name(self) -> &'static str {
        match self {
            SurfaceKind::Plane => "Plane",
            SurfaceKind::Paraboloid => "Paraboloid",
            SurfaceKind::Sinusoid => "Sinusoid",
            SurfaceKind::Hyperboloid => "Hyperboloid",
            SurfaceKind::Sphere => "Sphere",
            SurfaceKind::SchwarzSurface => "SchwarzSurface",
            SurfaceKind::MobiusStrip => "MobiusStrip",
            SurfaceKind::Torus => "Torus",
            SurfaceKind::Ellipsoid => "Ellipsoid",
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            SurfaceKind::Plane => "Plane",
            SurfaceKind::Paraboloid => "Paraboloid",
            SurfaceKind::Sinusoid => "Sinusoid",
            SurfaceKind::Hyperboloid => "Hyperboloid",
            SurfaceKind::Sphere => "Sphere",
            SurfaceKind::SchwarzSurface => "Schwarz surface",
            SurfaceKind::MobiusStrip => "Möbius strip",
            SurfaceKind::Torus => "Torus",
            SurfaceKind::Ellipsoid => "Ellipsoid",
        }
    }

    /// Names of the scalar parameters, in construction order.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            SurfaceKind::Plane => &["slope"],
            SurfaceKind::Paraboloid => &["coefficient"],
            SurfaceKind::Sinusoid => &["frequency"],
            SurfaceKind::Hyperboloid => &["a", "b", "c"],
            SurfaceKind::Sphere => &["radius"],
            SurfaceKind::SchwarzSurface => &["slope"],
            SurfaceKind::MobiusStrip => &["half_width"],
            SurfaceKind::Torus => &["major_radius", "minor_radius"],
            SurfaceKind::Ellipsoid => &["a", "b", "c"],
        }
    }

    /// Values used for parameters the caller leaves out.
    pub fn default_parameters(self) -> &'static [f64] {
        match self {
            SurfaceKind::Plane
            | SurfaceKind::Paraboloid
            | SurfaceKind::Sinusoid
            | SurfaceKind::Sphere
            | SurfaceKind::SchwarzSurface
            | SurfaceKind::MobiusStrip => &[1.0],
            SurfaceKind::Torus => &[1.0, 0.5],
            SurfaceKind::Hyperboloid | SurfaceKind::Ellipsoid => &[1.0, 1.0, 1.0],
        }
    }

    pub fn arity(self) -> usize {
        self.parameter_names().len()
    }

    /// Whether the surface builds its own angular mesh instead of sampling the
    /// rectangular domain.
    pub fn is_angular(self) -> bool {
        matches!(
            self,
            SurfaceKind::Sphere
                | SurfaceKind::MobiusStrip
                | SurfaceKind::Torus
                | SurfaceKind::Ellipsoid
        )
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase, drop separators, fold `ö` to `o`.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ö' { 'o' } else { c })
        .collect()
}

impl FromStr for SurfaceKind {
    type Err = SurfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        SurfaceKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == key)
            .ok_or_else(|| SurfError::UnknownSurfaceKind(s.to_string()))
    }
}
