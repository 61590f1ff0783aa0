//! Traits for mesh smoothing operations.

use crate::config::SmoothingConfig;
use crate::errors::MeshingError;
use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

/// Result of a smoothing run.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingReport {
    /// Relaxed positions, indexed like the input vertices.
    pub vertices: Vec<Point2<Real>>,
    /// Sweeps actually performed.
    pub iterations: usize,
    /// Largest single-vertex move during the last sweep.
    pub max_displacement: Real,
    /// Stopped by the tolerance rather than the iteration cap.
    pub converged: bool,
}

/// Relaxes vertex positions of a triangle mesh while holding a fixed set in
/// place.
pub trait SmoothingOps {
    /// **Mathematical Foundation: Discrete Laplacian Smoothing**
    ///
    /// For each free vertex v with edge neighbours N(v):
    /// ```text
    /// L(v)  = (1/|N(v)|) · Σ(n∈N(v)) (n − v)
    /// v'    = v + λ · L(v)
    /// ```
    /// Every sweep reads only the previous sweep's positions (Jacobi), so the
    /// result does not depend on vertex order. Sweeps stop after
    /// `config.max_iterations` or once no vertex moved more than
    /// `config.tolerance · scale`.
    ///
    /// `fixed[i]` marks vertices that must keep their exact position; vertices
    /// without neighbours never move either.
    fn laplacian_smooth(
        &self,
        faces: &[[usize; 3]],
        vertices: &[Point2<Real>],
        fixed: &[bool],
        config: &SmoothingConfig,
        scale: Real,
    ) -> Result<SmoothingReport, MeshingError>;
}

/// Checks shared by every implementation.
pub(crate) fn check_inputs(
    faces: &[[usize; 3]],
    vertices: &[Point2<Real>],
    fixed: &[bool],
    config: &SmoothingConfig,
) -> Result<(), MeshingError> {
    config.validate()?;
    if fixed.len() != vertices.len() {
        return Err(MeshingError::Smoothing(format!(
            "fixed-vertex mask has {} entries for {} vertices",
            fixed.len(),
            vertices.len()
        )));
    }
    if let Some(face) = faces.iter().find(|f| f.iter().any(|&i| i >= vertices.len())) {
        return Err(MeshingError::Smoothing(format!(
            "face {face:?} is out of range for {} vertices",
            vertices.len()
        )));
    }
    Ok(())
}

/// One Jacobi update of vertex `i`.
#[inline]
pub(crate) fn relaxed_position(
    i: usize,
    positions: &[Point2<Real>],
    neighbors: &[Vec<usize>],
    fixed: &[bool],
    lambda: Real,
) -> Point2<Real> {
    let current = positions[i];
    let ring = &neighbors[i];
    if fixed[i] || ring.is_empty() {
        return current;
    }
    let sum = ring.iter().fold(Vector2::zeros(), |acc, &n| acc + positions[n].coords);
    let average = sum / ring.len() as Real;
    current + (average - current.coords) * lambda
}

/// Largest move between two position snapshots, or an error if the sweep
/// produced a non-finite coordinate.
pub(crate) fn sweep_displacement(
    before: &[Point2<Real>],
    after: &[Point2<Real>],
    iteration: usize,
) -> Result<Real, MeshingError> {
    let mut max_displacement: Real = 0.0;
    for (i, (p, q)) in before.iter().zip(after).enumerate() {
        if !q.x.is_finite() || !q.y.is_finite() {
            return Err(MeshingError::Smoothing(format!(
                "vertex {i} became non-finite in sweep {iteration}"
            )));
        }
        max_displacement = max_displacement.max((q - p).norm());
    }
    Ok(max_displacement)
}
