//! Coordinate grids to triangle meshes.

use surf_geometry::RenderableSurface;
use surf_math::DVec2;

use crate::TriangleMesh;

/// Connect the points of an evaluated surface into a triangle mesh.
///
/// Every grid entry becomes one vertex, in row-major order, with UV
/// coordinates `(col / (cols - 1), row / (rows - 1))`. Each grid cell is split
/// into two triangles wound so that a height surface over an ascending domain
/// faces +Z. Triangles with a NaN or infinite corner are left out; their
/// vertices are kept so indices still map back to grid positions.
pub fn grid_to_mesh(surface: &RenderableSurface) -> TriangleMesh {
    let (rows, cols) = surface.shape();
    let positions: Vec<_> = surface.points().collect();

    let u_den = cols.saturating_sub(1).max(1) as f64;
    let v_den = rows.saturating_sub(1).max(1) as f64;
    let mut uvs = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            uvs.push(DVec2::new(c as f64 / u_den, r as f64 / v_den));
        }
    }

    let idx = |r: usize, c: usize| -> u32 { (r * cols + c) as u32 };
    let mut indices = Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1) * 6);
    let mut skipped = 0usize;
    for r in 0..rows.saturating_sub(1) {
        for c in 0..cols.saturating_sub(1) {
            let quad = [
                [idx(r, c), idx(r, c + 1), idx(r + 1, c + 1)],
                [idx(r, c), idx(r + 1, c + 1), idx(r + 1, c)],
            ];
            for tri in quad {
                if tri.iter().all(|&i| positions[i as usize].is_finite()) {
                    indices.extend_from_slice(&tri);
                } else {
                    skipped += 1;
                }
            }
        }
    }
    if skipped > 0 {
        log::debug!("Skipped {} triangles with non-finite corners", skipped);
    }

    let mut mesh = TriangleMesh {
        positions,
        normals: vec![],
        indices,
        uvs,
    };
    mesh.compute_normals();
    mesh
}
