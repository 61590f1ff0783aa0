//! Constrained Delaunay triangulation and interior classification, the two
//! geometry services the mesher is built on.

use crate::curve::Curve;
use crate::errors::MeshingError;
use crate::float_types::Real;
use crate::mesh::connectivity_counts;
use geo::{Contains, LineString, Point as GeoPoint, Polygon as GeoPolygon};
use nalgebra::Point2;
use spade::{
    ConstrainedDelaunayTriangulation, Point2 as SpadePoint, Triangulation as SpadeTriangulation,
};

/// Output of one triangulation pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    /// Counter-clockwise triangles indexing into the input points.
    pub faces: Vec<[usize; 3]>,
    /// Number of triangles incident to each input point.
    pub connectivity: Vec<usize>,
}

/// Triangulates a point set so that every constraint edge is an edge of the
/// result.
pub trait ConstrainedTriangulator {
    fn triangulate(
        &self,
        points: &[Point2<Real>],
        constraints: &[[usize; 2]],
    ) -> Result<Triangulation, MeshingError>;
}

/// Decides for every face whether it lies inside the region.
pub trait InteriorClassifier {
    fn classify(&self, points: &[Point2<Real>], faces: &[[usize; 3]]) -> Vec<bool>;
}

/// [`ConstrainedTriangulator`] backed by `spade`'s constrained Delaunay
/// triangulation.
///
/// Points are inserted in input order, then the constraints. `spade` merges
/// coincident points; a merged point is reported under the index of its first
/// occurrence and the later duplicates end up with zero connectivity.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpadeTriangulator;

impl ConstrainedTriangulator for SpadeTriangulator {
    fn triangulate(
        &self,
        points: &[Point2<Real>],
        constraints: &[[usize; 2]],
    ) -> Result<Triangulation, MeshingError> {
        let mut cdt: ConstrainedDelaunayTriangulation<SpadePoint<Real>> =
            ConstrainedDelaunayTriangulation::new();

        let mut handles = Vec::with_capacity(points.len());
        // spade vertex index -> first input index that produced it
        let mut owner: Vec<usize> = Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            let handle = cdt.insert(SpadePoint::new(p.x, p.y)).map_err(|e| {
                MeshingError::Triangulation(format!(
                    "point {i} ({}, {}) rejected: {e:?}",
                    p.x, p.y
                ))
            })?;
            if handle.index() == owner.len() {
                owner.push(i);
            }
            handles.push(handle);
        }

        for (k, &[a, b]) in constraints.iter().enumerate() {
            let (Some(&from), Some(&to)) = (handles.get(a), handles.get(b)) else {
                return Err(MeshingError::Triangulation(format!(
                    "constraint {k} ({a}, {b}) is out of range for {} points",
                    points.len()
                )));
            };
            if from == to {
                return Err(MeshingError::Triangulation(format!(
                    "constraint {k} ({a}, {b}) joins coincident points"
                )));
            }
            if !cdt.can_add_constraint(from, to) {
                return Err(MeshingError::Triangulation(format!(
                    "constraint {k} ({a}, {b}) crosses another constraint"
                )));
            }
            cdt.add_constraint(from, to);
        }

        let faces: Vec<[usize; 3]> = cdt
            .inner_faces()
            .map(|face| face.vertices().map(|v| owner[v.fix().index()]))
            .collect();
        let connectivity = connectivity_counts(&faces, points.len());

        Ok(Triangulation { faces, connectivity })
    }
}

/// [`InteriorClassifier`] for a region given as an outer curve and holes: a
/// face is interior when its centroid lies inside the outer curve and
/// outside every hole.
#[derive(Clone, Debug)]
pub struct RegionClassifier {
    region: GeoPolygon<Real>,
}

impl RegionClassifier {
    /// `curves[0]` is the outer boundary, the rest are holes.
    pub fn new(curves: &[Curve]) -> Self {
        let mut rings = curves.iter().map(Curve::to_line_string);
        let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
        Self { region: GeoPolygon::new(exterior, rings.collect()) }
    }

    /// Strictly inside the outer curve and outside every hole.
    pub fn contains_point(&self, p: &Point2<Real>) -> bool {
        self.region.contains(&GeoPoint::new(p.x, p.y))
    }
}

impl InteriorClassifier for RegionClassifier {
    fn classify(&self, points: &[Point2<Real>], faces: &[[usize; 3]]) -> Vec<bool> {
        faces
            .iter()
            .map(|&[a, b, c]| {
                let centroid = Point2::from((points[a].coords + points[b].coords + points[c].coords) / 3.0);
                self.contains_point(&centroid)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_centre() -> (Vec<Point2<Real>>, Vec<[usize; 2]>) {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.5),
        ];
        (points, vec![[0, 1], [1, 2], [2, 3], [3, 0]])
    }

    #[test]
    fn square_with_centre_gives_four_triangles() {
        let (points, constraints) = square_with_centre();
        let tri = SpadeTriangulator.triangulate(&points, &constraints).unwrap();
        assert_eq!(tri.faces.len(), 4);
        assert_eq!(tri.connectivity, vec![2, 2, 2, 2, 4]);
        for &[a, b, c] in &tri.faces {
            let area = crate::mesh::triangle_signed_area(&points[a], &points[b], &points[c]);
            assert!(area > 0.0, "faces must be counter-clockwise");
        }
    }

    #[test]
    fn constraint_edges_are_kept() {
        // without the constraint the Delaunay edge would be 1-3
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, -0.2),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.2),
        ];
        let tri = SpadeTriangulator.triangulate(&points, &[[0, 2]]).unwrap();
        let has_edge = |a: usize, b: usize| {
            tri.faces.iter().any(|f| f.contains(&a) && f.contains(&b))
        };
        assert!(has_edge(0, 2));
        assert!(!has_edge(1, 3));
    }

    #[test]
    fn crossing_constraints_are_rejected() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let err = SpadeTriangulator.triangulate(&points, &[[0, 1], [2, 3]]).unwrap_err();
        assert!(matches!(err, MeshingError::Triangulation(_)));
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(Real::NAN, 1.0)];
        assert!(SpadeTriangulator.triangulate(&points, &[]).is_err());
    }

    #[test]
    fn duplicates_map_to_first_occurrence() {
        let (mut points, constraints) = square_with_centre();
        points.push(Point2::new(0.5, 0.5));
        let tri = SpadeTriangulator.triangulate(&points, &constraints).unwrap();
        assert_eq!(tri.connectivity[5], 0);
        assert_eq!(tri.connectivity[4], 4);
    }

    #[test]
    fn hole_faces_are_exterior() {
        let outer = Curve::square(3.0);
        let hole = Curve::square(1.0).translated(1.0, 1.0);
        let classifier = RegionClassifier::new(&[outer, hole]);
        assert!(classifier.contains_point(&Point2::new(0.5, 0.5)));
        assert!(!classifier.contains_point(&Point2::new(1.5, 1.5)));
        assert!(!classifier.contains_point(&Point2::new(4.0, 1.5)));

        let points = vec![
            Point2::new(1.2, 1.2),
            Point2::new(1.8, 1.2),
            Point2::new(1.5, 1.8),
            Point2::new(0.2, 0.2),
            Point2::new(0.8, 0.2),
            Point2::new(0.5, 0.8),
        ];
        assert_eq!(classifier.classify(&points, &[[0, 1, 2], [3, 4, 5]]), vec![false, true]);
    }
}
