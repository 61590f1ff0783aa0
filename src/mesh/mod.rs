//! Indexed planar triangle meshes and vertex renumbering.

use crate::aabb::Aabb2;
use crate::float_types::Real;
use nalgebra::Point2;

pub mod quality;
pub mod topology;

pub use quality::{MeshQualityMetrics, TriangleQuality};
pub use topology::{TopologyAnalysis, connectivity_counts, vertex_neighbors};

/// Triangles over a shared vertex list in the XY plane.
///
/// Faces index into `vertices`; the mesher emits them counter-clockwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriMesh2 {
    pub faces: Vec<[usize; 3]>,
    pub vertices: Vec<Point2<Real>>,
}

impl TriMesh2 {
    pub const fn new(faces: Vec<[usize; 3]>, vertices: Vec<Point2<Real>>) -> Self {
        Self { faces, vertices }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Split into the `(F, V)` pair.
    pub fn into_parts(self) -> (Vec<[usize; 3]>, Vec<Point2<Real>>) {
        (self.faces, self.vertices)
    }

    #[inline]
    pub fn triangle(&self, face: usize) -> [Point2<Real>; 3] {
        self.faces[face].map(|i| self.vertices[i])
    }

    pub fn centroid(&self, face: usize) -> Point2<Real> {
        let [a, b, c] = self.triangle(face);
        Point2::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Twice the signed area is the 2D cross product; positive when CCW.
    pub fn signed_area(&self, face: usize) -> Real {
        let [a, b, c] = self.triangle(face);
        triangle_signed_area(&a, &b, &c)
    }

    /// Total unsigned area.
    pub fn area(&self) -> Real {
        (0..self.faces.len()).map(|f| self.signed_area(f).abs()).sum()
    }

    pub fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.vertices)
    }

    /// Human readable list of structural problems, empty for a well formed
    /// mesh: out-of-range or repeated face indices, degenerate faces and
    /// vertices no face uses.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut referenced = vec![false; self.vertices.len()];

        for (f, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&i| i >= self.vertices.len()) {
                issues.push(format!(
                    "Face {f} references vertex {bad} (vertex count = {})",
                    self.vertices.len()
                ));
                continue;
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                issues.push(format!("Face {f} has duplicate vertex indices {face:?}"));
            }
            if self.signed_area(f).abs() <= Real::EPSILON {
                issues.push(format!("Face {f} is degenerate"));
            }
            for &i in face {
                referenced[i] = true;
            }
        }

        issues.extend(
            referenced
                .iter()
                .enumerate()
                .filter(|&(_, used)| !used)
                .map(|(i, _)| format!("Vertex {i} is not referenced by any face")),
        );
        issues
    }

    /// Drop every vertex no face references and renumber the rest densely.
    ///
    /// The surviving vertices keep their relative order, so the remap is a
    /// stable bijection onto `0..m`.
    pub fn compact(faces: &[[usize; 3]], vertices: &[Point2<Real>]) -> Self {
        let mut remap: Vec<Option<usize>> = vec![None; vertices.len()];
        for face in faces {
            for &i in face {
                remap[i] = Some(0);
            }
        }

        let mut kept = Vec::with_capacity(vertices.len());
        for (old, slot) in remap.iter_mut().enumerate() {
            if slot.is_some() {
                *slot = Some(kept.len());
                kept.push(vertices[old]);
            }
        }

        let faces = faces
            .iter()
            .map(|face| face.map(|i| remap[i].unwrap_or(i)))
            .collect();

        Self { faces, vertices: kept }
    }
}

#[inline]
pub fn triangle_signed_area(a: &Point2<Real>, b: &Point2<Real>, c: &Point2<Real>) -> Real {
    0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compaction_drops_unreferenced_vertices() {
        let vertices = vec![
            Point2::new(9.0, 9.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(7.0, 7.0),
            Point2::new(0.0, 1.0),
        ];
        let mesh = TriMesh2::compact(&[[1, 2, 4]], &vertices);
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
        assert_eq!(mesh.vertices, vec![vertices[1], vertices[2], vertices[4]]);
        assert!(mesh.validate().is_empty());
    }

    #[test]
    fn validate_reports_every_issue() {
        let mesh = TriMesh2::new(
            vec![[0, 1, 1], [0, 1, 7]],
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
        );
        let issues = mesh.validate();
        assert!(issues.iter().any(|s| s.contains("duplicate")));
        assert!(issues.iter().any(|s| s.contains("references vertex 7")));
        assert!(issues.iter().any(|s| s.contains("Vertex 2 is not referenced")));
    }

    #[test]
    fn area_of_unit_square_split() {
        let mesh = TriMesh2::new(
            vec![[0, 1, 2], [0, 2, 3]],
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
        );
        assert_eq!(mesh.area(), 1.0);
        assert!(mesh.signed_area(0) > 0.0);
    }
}
