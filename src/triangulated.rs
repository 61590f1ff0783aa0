use crate::float_types::Real;
use crate::mesh::TriMesh2;
use crate::pipeline::MeshOutcome;
use nalgebra::Point2;

/// A planar region represented by triangles.
///
/// Anything that can present itself as a bunch of triangles in the plane
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated2D {
    /// Call `f` for each triangle, corners in counter-clockwise order.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Point2<Real>; 3]);
}

impl Triangulated2D for TriMesh2 {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Point2<Real>; 3]),
    {
        for face in &self.faces {
            f(face.map(|i| self.vertices[i]));
        }
    }
}

/// A skipped outcome has no triangles.
impl Triangulated2D for MeshOutcome {
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Point2<Real>; 3]),
    {
        if let Some(mesh) = self.mesh() {
            mesh.visit_triangles(f);
        }
    }
}
