//! Evaluated surfaces ready for a rendering backend.

use serde::{Deserialize, Serialize};
use surf_core::{Result, SurfError, Tolerance};
use surf_math::{Aabb3, DVec3, Grid, Point3};

/// Three coordinate grids of identical shape.
///
/// Entry `(r, c)` of `x`, `y` and `z` together form one point of the surface;
/// neighbouring entries are neighbouring mesh vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSurface")]
pub struct RenderableSurface {
    x: Grid,
    y: Grid,
    z: Grid,
}

#[derive(Deserialize)]
struct RawSurface {
    x: Grid,
    y: Grid,
    z: Grid,
}

impl TryFrom<RawSurface> for RenderableSurface {
    type Error = SurfError;

    fn try_from(raw: RawSurface) -> Result<Self> {
        Self::try_new(raw.x, raw.y, raw.z)
    }
}

impl RenderableSurface {
    /// Bundle three grids, checking that their shapes agree.
    pub fn try_new(x: Grid, y: Grid, z: Grid) -> Result<Self> {
        for other in [&y, &z] {
            if other.shape() != x.shape() {
                return Err(SurfError::ShapeMismatch {
                    expected: x.shape(),
                    found: other.shape(),
                });
            }
        }
        Ok(Self { x, y, z })
    }

    /// Callers guarantee equal shapes.
    pub(crate) fn from_grids(x: Grid, y: Grid, z: Grid) -> Self {
        debug_assert!(x.shape() == y.shape() && y.shape() == z.shape());
        Self { x, y, z }
    }

    pub fn x(&self) -> &Grid {
        &self.x
    }

    pub fn y(&self) -> &Grid {
        &self.y
    }

    pub fn z(&self) -> &Grid {
        &self.z
    }

    /// `(rows, cols)` shared by all three grids.
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    pub fn point(&self, row: usize, col: usize) -> Option<Point3> {
        Some(DVec3::new(
            self.x.get(row, col)?,
            self.y.get(row, col)?,
            self.z.get(row, col)?,
        ))
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .zip(self.z.iter())
            .map(|((x, y), z)| DVec3::new(x, y, z))
    }

    /// Bounding box of the finite points.
    pub fn bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.points())
    }

    /// Number of points with at least one NaN or infinite coordinate.
    pub fn non_finite_count(&self) -> usize {
        self.points().filter(|p| !p.is_finite()).count()
    }

    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.x.approx_eq(&other.x, tol)
            && self.y.approx_eq(&other.y, tol)
            && self.z.approx_eq(&other.z, tol)
    }

    pub fn into_grids(self) -> (Grid, Grid, Grid) {
        (self.x, self.y, self.z)
    }
}
