//! Mesh assembly from extracted triangles.
//!
//! Turns the readback triangle buffer into a renderable vertex/index/normal
//! layout. Vertices are identity-indexed (three per triangle) and normals
//! are flat: the face normal of the owning triangle, recomputed from the
//! final winding. Averaging normals across coincident corners for smooth
//! shading is deliberately left out of this stage.

use glam::Vec3;

use crate::types::{IslandMesh, Triangle};

/// Rebuild `mesh` in place from `triangles`, preserving buffer capacity
/// across regenerations.
pub fn assemble_into(mesh: &mut IslandMesh, triangles: &[Triangle]) {
  mesh.clear();
  mesh.vertices.reserve(triangles.len() * 3);
  mesh.indices.reserve(triangles.len() * 3);
  mesh.normals.reserve(triangles.len() * 3);

  for (index, triangle) in triangles.iter().enumerate() {
    let normal = face_normal(triangle);
    for corner in 0..3 {
      let position = triangle.corner(corner);
      mesh.vertices.push(position);
      mesh.indices.push((index * 3 + corner) as u32);
      mesh.normals.push(normal);
      mesh.bounds.encapsulate(position);
    }
  }
}

/// Assemble a fresh mesh from `triangles`.
pub fn assemble(triangles: &[Triangle]) -> IslandMesh {
  let mut mesh = IslandMesh::new();
  assemble_into(&mut mesh, triangles);
  mesh
}

/// Unit normal of the triangle's winding, +Y for degenerate triangles.
#[inline]
fn face_normal(triangle: &Triangle) -> Vec3 {
  let normal = (triangle.b - triangle.a).cross(triangle.c - triangle.a);
  let len_sq = normal.length_squared();
  if len_sq < 1e-12 {
    return Vec3::Y;
  }
  normal * len_sq.sqrt().recip()
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
