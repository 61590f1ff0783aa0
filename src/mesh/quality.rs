//! Shape quality of the faces of a planar mesh.

use super::{TriMesh2, triangle_signed_area};
use crate::float_types::{PI, Real, SQRT_3};
use nalgebra::Point2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Faces whose smallest angle is below this are counted as slivers.
const SLIVER_ANGLE: Real = PI / 18.0;

/// Shape of one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleQuality {
    /// Smallest interior angle in radians; 0 for a degenerate face.
    pub min_angle: Real,
    /// Normalised shape measure in `[0, 1]`, 1 for an equilateral face.
    pub score: Real,
}

impl TriangleQuality {
    /// **Mathematical Foundation: Area-to-Edge Shape Measure**
    ///
    /// ```text
    /// q = 4·√3·A / (a² + b² + c²)
    /// ```
    /// `q` reaches 1 only for an equilateral triangle and tends to 0 as the
    /// face flattens, whatever the edge lengths are.
    pub fn of(corners: [Point2<Real>; 3]) -> Self {
        let [a, b, c] = corners;
        let edges = [b - a, c - b, a - c];
        let squared: Real = edges.iter().map(|e| e.norm_squared()).sum();
        let area = triangle_signed_area(&a, &b, &c).abs();
        if !(squared > 0.0) || area <= Real::EPSILON * squared {
            return Self { min_angle: 0.0, score: 0.0 };
        }

        // angle at each corner, between its outgoing and incoming edge
        let min_angle = (0..3)
            .map(|k| (-edges[(k + 2) % 3]).angle(&edges[k]))
            .fold(Real::INFINITY, Real::min);

        Self {
            min_angle,
            score: (4.0 * SQRT_3 * area / squared).min(1.0),
        }
    }

    pub fn is_sliver(&self) -> bool {
        self.min_angle < SLIVER_ANGLE
    }
}

/// Mesh-wide summary; all zero for an empty mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshQualityMetrics {
    pub avg_quality: Real,
    pub min_quality: Real,
    /// Faces with a smallest angle under 10°.
    pub sliver_count: usize,
}

impl TriMesh2 {
    /// Quality of every face, in face order.
    pub fn analyze_triangle_quality(&self) -> Vec<TriangleQuality> {
        let quality = |face: &[usize; 3]| TriangleQuality::of(face.map(|i| self.vertices[i]));

        #[cfg(feature = "parallel")]
        let qualities = self.faces.par_iter().map(quality).collect();

        #[cfg(not(feature = "parallel"))]
        let qualities = self.faces.iter().map(quality).collect();

        qualities
    }

    pub fn compute_mesh_quality(&self) -> MeshQualityMetrics {
        let qualities = self.analyze_triangle_quality();
        if qualities.is_empty() {
            return MeshQualityMetrics::default();
        }

        let total: Real = qualities.iter().map(|q| q.score).sum();
        MeshQualityMetrics {
            avg_quality: total / qualities.len() as Real,
            min_quality: qualities.iter().map(|q| q.score).fold(Real::INFINITY, Real::min),
            sliver_count: qualities.iter().filter(|q| q.is_sliver()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equilateral_triangle_is_perfect() {
        let q = TriangleQuality::of([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.5 * SQRT_3),
        ]);
        assert_relative_eq!(q.min_angle, PI / 3.0, epsilon = 1e-9);
        assert_relative_eq!(q.score, 1.0, epsilon = 1e-9);
        assert!(!q.is_sliver());
    }

    #[test]
    fn right_isoceles_scores_below_one() {
        let q = TriangleQuality::of([Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)]);
        assert_relative_eq!(q.min_angle, PI / 4.0, epsilon = 1e-9);
        assert_relative_eq!(q.score, SQRT_3 / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn sliver_is_counted() {
        let mesh = TriMesh2::new(
            vec![[0, 1, 2]],
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.5, 0.01)],
        );
        let metrics = mesh.compute_mesh_quality();
        assert_eq!(metrics.sliver_count, 1);
        assert!(metrics.min_quality < 0.1);
        assert_relative_eq!(metrics.avg_quality, metrics.min_quality);
    }

    #[test]
    fn collapsed_face_scores_zero() {
        let p = Point2::new(2.0, 3.0);
        assert_eq!(TriangleQuality::of([p, p, p]), TriangleQuality { min_angle: 0.0, score: 0.0 });
        assert_eq!(TriMesh2::new(Vec::new(), Vec::new()).compute_mesh_quality(), MeshQualityMetrics::default());
    }
}
