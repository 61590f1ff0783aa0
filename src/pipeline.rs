//! The end-to-end meshing pipeline: boundary preparation, seeding, seed
//! filtering, two-pass constrained meshing, compaction and smoothing.

use crate::aabb::Aabb2;
use crate::boundary::{MAX_POINT_COUNT, prepare_boundary};
use crate::config::MesherConfig;
use crate::curve::Curve;
use crate::errors::{MeshingError, MeshingSkipped};
use crate::float_types::Real;
use crate::mesh::TriMesh2;
use crate::mesher::{ConstrainedMesher, InteriorMesh};
use crate::seeds::{candidate_count, filter_seeds, generate_seeds};
use crate::smoothing::{DefaultSmoothingOps, SmoothingOps};
use crate::triangulate::{ConstrainedTriangulator, RegionClassifier, SpadeTriangulator};
use nalgebra::Point2;
use tracing::{debug, info, warn};

/// Result of a meshing run that did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum MeshOutcome {
    /// A compacted, smoothed mesh.
    Meshed(TriMesh2),
    /// The spacing was too coarse; no mesh is produced.
    Skipped(MeshingSkipped),
}

impl MeshOutcome {
    #[inline]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, MeshOutcome::Skipped(_))
    }

    pub const fn mesh(&self) -> Option<&TriMesh2> {
        match self {
            MeshOutcome::Meshed(mesh) => Some(mesh),
            MeshOutcome::Skipped(_) => None,
        }
    }

    pub const fn skipped(&self) -> Option<&MeshingSkipped> {
        match self {
            MeshOutcome::Meshed(_) => None,
            MeshOutcome::Skipped(reason) => Some(reason),
        }
    }

    /// The `(F, V)` pair; both empty when meshing was skipped.
    pub fn into_parts(self) -> (Vec<[usize; 3]>, Vec<Point2<Real>>) {
        match self {
            MeshOutcome::Meshed(mesh) => mesh.into_parts(),
            MeshOutcome::Skipped(_) => (Vec::new(), Vec::new()),
        }
    }
}

/// Side-effect hook run after a run has finished, e.g. to draw the result.
///
/// Observers see the final outcome only and cannot change it.
pub trait MeshObserver {
    fn observe(&self, outcome: &MeshOutcome, curves: &[Curve]);
}

/// Configurable pipeline with swappable triangulation and smoothing backends.
///
/// # Example
/// ```
/// # use planar_mesher::{config::MesherConfig, curve::Curve, pipeline::Mesher};
/// let mesher = Mesher::new(MesherConfig::new(0.25));
/// let outcome = mesher.run(&[Curve::square(2.0)]).unwrap();
/// assert!(!outcome.is_skipped());
/// ```
pub struct Mesher {
    config: MesherConfig,
    triangulator: Box<dyn ConstrainedTriangulator>,
    smoother: Box<dyn SmoothingOps>,
    observers: Vec<Box<dyn MeshObserver>>,
}

impl Mesher {
    pub fn new(config: MesherConfig) -> Self {
        Self {
            config,
            triangulator: Box::new(SpadeTriangulator),
            smoother: Box::new(DefaultSmoothingOps::default()),
            observers: Vec::new(),
        }
    }

    pub fn with_triangulator(mut self, triangulator: impl ConstrainedTriangulator + 'static) -> Self {
        self.triangulator = Box::new(triangulator);
        self
    }

    pub fn with_smoother(mut self, smoother: impl SmoothingOps + 'static) -> Self {
        self.smoother = Box::new(smoother);
        self
    }

    /// Register an observer; it only runs when `config.visualize` is set.
    pub fn with_observer(mut self, observer: impl MeshObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub const fn config(&self) -> &MesherConfig {
        &self.config
    }

    /// Mesh the region bounded by `curves` (outer boundary first, then holes).
    ///
    /// # Errors
    /// [`MeshingError::InvalidGeometry`] / [`MeshingError::InvalidConfig`] for
    /// bad input, and whatever the triangulation or smoothing backends report.
    /// A spacing that is too coarse is not an error: it yields
    /// [`MeshOutcome::Skipped`].
    pub fn run(&self, curves: &[Curve]) -> Result<MeshOutcome, MeshingError> {
        let outcome = self.mesh(curves)?;

        if self.config.visualize {
            if self.observers.is_empty() {
                debug!("visualize requested but no observer is registered");
            }
            for observer in &self.observers {
                observer.observe(&outcome, curves);
            }
        }

        Ok(outcome)
    }

    fn mesh(&self, curves: &[Curve]) -> Result<MeshOutcome, MeshingError> {
        let config = &self.config;
        config.validate()?;
        let spacing = config.point_spacing;

        let boundary =
            prepare_boundary(curves, spacing, config.resample_boundary, config.interpolation)?;
        if let Some(&curve) = boundary.coarse_curves.first() {
            let reason = MeshingSkipped {
                removed: 0,
                vertex_count: boundary.len(),
                coarse_curve: Some(curve),
                spacing,
            };
            warn!(%reason, curve, "curve is shorter than three spacings");
            return Ok(MeshOutcome::Skipped(reason));
        }

        let bounds = Aabb2::from_points(&boundary.points)
            .ok_or_else(|| MeshingError::invalid_geometry("boundary has no points"))?;
        let expected = candidate_count(&bounds, spacing);
        if !(expected <= MAX_POINT_COUNT as Real) {
            return Err(MeshingError::invalid_geometry(format!(
                "point spacing {spacing} would seed about {expected} points, more than {MAX_POINT_COUNT}"
            )));
        }

        let candidates = generate_seeds(&bounds, spacing, config.seed_strategy);
        let fine_boundary = boundary.fine_boundary(spacing);
        let seeds = filter_seeds(&candidates, &fine_boundary, spacing);
        info!(
            curves = curves.len(),
            boundary_points = boundary.len(),
            candidates = candidates.len(),
            seeds = seeds.len(),
            spacing,
            "seeded region"
        );

        let mut points = Vec::with_capacity(boundary.len() + seeds.len());
        points.extend_from_slice(&boundary.points);
        points.extend(seeds);

        let classifier = RegionClassifier::new(&boundary.working_curves);
        let mesher = ConstrainedMesher::new(
            self.triangulator.as_ref(),
            &classifier,
            config.min_connectivity,
        );
        let (faces, reduced) =
            match mesher.run(&points, &boundary.constraints, boundary.len(), spacing)? {
                InteriorMesh::Faces { faces, points } => (faces, points),
                InteriorMesh::Skipped(reason) => {
                    warn!(%reason, "meshing skipped");
                    return Ok(MeshOutcome::Skipped(reason));
                },
            };

        let mut mesh = TriMesh2::compact(&faces, &reduced);

        if let Some(smoothing) = &config.smoothing {
            let fixed = mesh.boundary_mask();
            let report = self.smoother.laplacian_smooth(
                &mesh.faces,
                &mesh.vertices,
                &fixed,
                smoothing,
                spacing,
            )?;
            mesh.vertices = report.vertices;
        }

        let quality = mesh.compute_mesh_quality();
        info!(
            faces = mesh.faces.len(),
            vertices = mesh.vertices.len(),
            avg_quality = quality.avg_quality,
            slivers = quality.sliver_count,
            "meshed region"
        );

        Ok(MeshOutcome::Meshed(mesh))
    }
}

/// Mesh the region bounded by `curves` with the default backends.
///
/// Shorthand for `Mesher::new(config.clone()).run(curves)`.
pub fn generate_mesh(curves: &[Curve], config: &MesherConfig) -> Result<MeshOutcome, MeshingError> {
    Mesher::new(config.clone()).run(curves)
}
