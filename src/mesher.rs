//! Two-pass constrained meshing: triangulate, prune poorly connected seed
//! vertices, triangulate again and keep the interior faces.

use crate::errors::{MeshingError, MeshingSkipped};
use crate::float_types::Real;
use crate::triangulate::{ConstrainedTriangulator, InteriorClassifier};
use nalgebra::Point2;
use tracing::{debug, info};

/// Point set after the pruning pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrunedPoints {
    pub points: Vec<Point2<Real>>,
    /// Constraints rewritten to the new numbering.
    pub constraints: Vec<[usize; 2]>,
    /// Old index -> new index, `None` for removed vertices.
    pub remap: Vec<Option<usize>>,
    pub removed: usize,
}

/// Remove every vertex whose connectivity is at most `threshold` unless it is
/// an endpoint of a constraint edge.
///
/// Survivors keep their relative order. Constraint endpoints are never
/// removed, so every rewritten constraint is still valid.
pub fn prune_poorly_connected(
    points: &[Point2<Real>],
    constraints: &[[usize; 2]],
    connectivity: &[usize],
    threshold: usize,
) -> PrunedPoints {
    let mut on_constraint = vec![false; points.len()];
    for &[a, b] in constraints {
        on_constraint[a] = true;
        on_constraint[b] = true;
    }

    let mut remap: Vec<Option<usize>> = vec![None; points.len()];
    let mut kept = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if on_constraint[i] || connectivity[i] > threshold {
            remap[i] = Some(kept.len());
            kept.push(*p);
        }
    }

    let constraints = constraints
        .iter()
        .filter_map(|&[a, b]| Some([remap[a]?, remap[b]?]))
        .collect();
    let removed = points.len() - kept.len();

    PrunedPoints { points: kept, constraints, remap, removed }
}

/// What the two passes produced.
#[derive(Clone, Debug, PartialEq)]
pub enum InteriorMesh {
    /// Interior faces over the reduced, not yet compacted, point set.
    Faces {
        faces: Vec<[usize; 3]>,
        points: Vec<Point2<Real>>,
    },
    /// The spacing is too coarse for the curves; nothing is returned.
    Skipped(MeshingSkipped),
}

/// Runs the triangulate → prune → re-triangulate sequence exactly once.
pub struct ConstrainedMesher<'a> {
    triangulator: &'a dyn ConstrainedTriangulator,
    classifier: &'a dyn InteriorClassifier,
    min_connectivity: usize,
}

impl<'a> ConstrainedMesher<'a> {
    pub fn new(
        triangulator: &'a dyn ConstrainedTriangulator,
        classifier: &'a dyn InteriorClassifier,
        min_connectivity: usize,
    ) -> Self {
        Self { triangulator, classifier, min_connectivity }
    }

    /// Mesh `points`, whose first `boundary_count` entries are the boundary
    /// points referenced by `constraints` and the rest are seeds.
    ///
    /// Skips (rather than fails) when the first pass prunes nothing. A region
    /// too thin to hold any seed is still meshed from its boundary points.
    pub fn run(
        &self,
        points: &[Point2<Real>],
        constraints: &[[usize; 2]],
        boundary_count: usize,
        spacing: Real,
    ) -> Result<InteriorMesh, MeshingError> {
        let first = self.triangulator.triangulate(points, constraints)?;
        let pruned = prune_poorly_connected(
            points,
            constraints,
            &first.connectivity,
            self.min_connectivity,
        );
        debug!(
            faces = first.faces.len(),
            vertices = points.len(),
            removed = pruned.removed,
            "first triangulation pass"
        );

        if pruned.removed == 0 {
            return Ok(InteriorMesh::Skipped(MeshingSkipped {
                removed: 0,
                vertex_count: points.len(),
                coarse_curve: None,
                spacing,
            }));
        }

        let second = self.triangulator.triangulate(&pruned.points, &pruned.constraints)?;
        let interior = self.classifier.classify(&pruned.points, &second.faces);
        let faces: Vec<[usize; 3]> = second
            .faces
            .iter()
            .zip(interior)
            .filter_map(|(face, inside)| inside.then_some(*face))
            .collect();

        // boundary points come first and are never pruned, so they keep
        // their indices; anything above is a seed
        let mut seed_used = vec![false; pruned.points.len()];
        for &i in faces.iter().flatten() {
            if i >= boundary_count {
                seed_used[i] = true;
            }
        }
        let interior_seeds = seed_used.iter().filter(|&&used| used).count();

        info!(
            total_faces = second.faces.len(),
            interior_faces = faces.len(),
            interior_seeds,
            "second triangulation pass"
        );

        Ok(InteriorMesh::Faces { faces, points: pruned.points })
    }
}
