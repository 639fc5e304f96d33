pub mod tessellate;
pub mod triangulate;

pub use tessellate::grid_to_mesh;
pub use triangulate::TriangleMesh;
