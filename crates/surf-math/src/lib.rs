pub mod aabb;
pub mod grid;
pub mod interval;
pub mod sampling;

pub use glam::{DVec2, DVec3};
pub use aabb::Aabb3;
pub use grid::Grid;
pub use interval::{Domain, Interval};
pub use sampling::{linspace, meshgrid};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;
