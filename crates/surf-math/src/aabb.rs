use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    /// Bounding box of the finite points in `points`.
    ///
    /// Points with any NaN or infinite coordinate are skipped; returns `None`
    /// when no finite point remains.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut finite = points.into_iter().filter(|p| p.is_finite());
        let first = finite.next()?;
        let (min, max) = finite.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Edge lengths along each axis.
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec3(1.0, 2.0, 3.0), dvec3(-1.0, 5.0, 0.0), dvec3(3.0, -1.0, 2.0)];
        let aabb = Aabb3::from_points(pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
        assert_eq!(aabb.extents(), dvec3(4.0, 6.0, 3.0));
    }

    #[test]
    fn test_from_points_skips_non_finite() {
        let pts = vec![
            dvec3(f64::NAN, 0.0, 0.0),
            dvec3(1.0, 1.0, 1.0),
            dvec3(0.0, f64::INFINITY, 0.0),
            dvec3(-1.0, 0.0, 2.0),
        ];
        let aabb = Aabb3::from_points(pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, 0.0, 1.0));
        assert_eq!(aabb.max, dvec3(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb3::from_points(Vec::new()).is_none());
        assert!(Aabb3::from_points(vec![dvec3(f64::NAN, 0.0, 0.0)]).is_none());
    }
}
