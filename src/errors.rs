//! Meshing errors

use crate::float_types::Real;

/// Everything that can make a meshing run fail.
///
/// A run that is merely skipped because the spacing is too coarse is *not*
/// an error, see [`MeshingSkipped`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshingError {
    /// A curve is malformed (too few points, repeated points, non-finite
    /// coordinates) or the spacing cannot describe a mesh.
    #[error("(InvalidGeometry) {}", describe_curve(.curve, .reason))]
    InvalidGeometry {
        /// Index of the offending curve, if a single curve is to blame.
        curve: Option<usize>,
        reason: String,
    },
    /// A configuration value is outside of its admissible range.
    #[error("(InvalidConfig) {0}")]
    InvalidConfig(String),
    /// The triangulation backend rejected the input.
    #[error("(Triangulation) {0}")]
    Triangulation(String),
    /// The smoothing backend produced an unusable result.
    #[error("(Smoothing) {0}")]
    Smoothing(String),
}

impl MeshingError {
    pub fn invalid_curve(curve: usize, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry { curve: Some(curve), reason: reason.into() }
    }

    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry { curve: None, reason: reason.into() }
    }
}

fn describe_curve(curve: &Option<usize>, reason: &str) -> String {
    match curve {
        Some(index) => format!("curve {index}: {reason}"),
        None => reason.to_string(),
    }
}

/// The point spacing is too coarse for the size of the curves: some curve
/// is shorter than three spacings, or the pruning pass removed nothing. The
/// pipeline reports this instead of returning a low quality mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "meshing skipped: point spacing {spacing} is too large for the curve size \
     ({removed} of {vertex_count} vertices pruned)"
)]
pub struct MeshingSkipped {
    /// Vertices removed by the connectivity pruning pass.
    pub removed: usize,
    /// Vertices present in the first triangulation pass, or the boundary
    /// point count when no triangulation ran.
    pub vertex_count: usize,
    /// First curve shorter than three spacings, if that is why.
    pub coarse_curve: Option<usize>,
    pub spacing: Real,
}
