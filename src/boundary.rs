//! Turn the ordered curve list into the boundary point set and its cyclic
//! constraint edges.

use crate::curve::{Curve, Interpolation, curve_length, resample_curve_evenly, subdivide_curve};
use crate::errors::MeshingError;
use crate::float_types::Real;
use nalgebra::Point2;
use std::ops::Range;
use tracing::debug;

/// Boundary data shared by the later pipeline stages.
#[derive(Clone, Debug, Default)]
pub struct PreparedBoundary {
    /// Boundary points of every curve, curve by curve.
    pub points: Vec<Point2<Real>>,
    /// One closed cycle of edges per curve, indexing into `points`.
    pub constraints: Vec<[usize; 2]>,
    /// The curves whose points ended up in `points`; used to decide which
    /// triangles lie inside the region.
    pub working_curves: Vec<Curve>,
    /// Evenly resampled copies of the input curves, kept apart from `points`
    /// and only used to build the fine proximity set.
    pub resampled_curves: Vec<Curve>,
    /// Range of `points` belonging to each curve.
    pub curve_ranges: Vec<Range<usize>>,
    /// Curves shorter than three spacings. Their point count was clamped up
    /// to 3, so the spacing is too coarse to mesh them.
    pub coarse_curves: Vec<usize>,
}

impl PreparedBoundary {
    /// Number of points taken from the curves.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finely subdivided boundary used to measure how close a seed is to the
    /// curves: each resampled curve is split to roughly `spacing / 2`.
    ///
    /// Never part of the triangulation.
    pub fn fine_boundary(&self, spacing: Real) -> Vec<Point2<Real>> {
        let target = 0.5 * spacing;
        self.resampled_curves
            .iter()
            .flat_map(|curve| {
                let curve_spacing = curve_length(curve) / curve.len().max(1) as Real;
                let factor = (curve_spacing / target).round().max(1.0) as usize;
                subdivide_curve(curve, factor).into_points()
            })
            .collect()
    }
}

/// Upper bound on the points of one curve and on the candidate seeds of a
/// run; finer spacings are rejected instead of exhausting memory.
pub const MAX_POINT_COUNT: usize = 10_000_000;

/// `ceil(length / spacing)`, the unclamped number of spacings along a curve.
#[inline]
pub fn spacing_count(length: Real, spacing: Real) -> Real {
    (length / spacing).ceil()
}

/// Number of evenly spaced points used for a curve of `length`.
#[inline]
pub fn target_point_count(length: Real, spacing: Real) -> usize {
    (spacing_count(length, spacing) as usize).max(3)
}

/// **Boundary preparation**
///
/// For every curve:
/// 1. compute its closed arc length `L` and `n = ceil(L / spacing)` (at least 3),
/// 2. resample it to `n` evenly spaced points,
/// 3. use the resampled curve as boundary when `resample` is set, the raw
///    points otherwise,
/// 4. append the points and the cyclic edges `(i, i+1 mod n)` shifted by the
///    number of points already collected.
///
/// Curve 0 is the outer boundary, the remaining curves are holes. Curves with
/// `ceil(L / spacing) < 3` are still prepared but listed in `coarse_curves`.
///
/// # Errors
/// [`MeshingError::InvalidGeometry`] for an empty curve list, a spacing that is
/// not positive and finite, a degenerate curve, or a curve that would need
/// more than [`MAX_POINT_COUNT`] points.
pub fn prepare_boundary(
    curves: &[Curve],
    spacing: Real,
    resample: bool,
    interpolation: Interpolation,
) -> Result<PreparedBoundary, MeshingError> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(MeshingError::invalid_geometry(format!(
            "point spacing must be positive and finite, got {spacing}"
        )));
    }
    if curves.is_empty() {
        return Err(MeshingError::invalid_geometry("no boundary curve given"));
    }

    let mut boundary = PreparedBoundary::default();
    for (index, curve) in curves.iter().enumerate() {
        curve.validate(index)?;

        let length = curve_length(curve);
        let spacings = spacing_count(length, spacing);
        if !(spacings <= MAX_POINT_COUNT as Real) {
            return Err(MeshingError::invalid_curve(
                index,
                format!(
                    "point spacing {spacing} needs {spacings} points for length {length}, \
                     more than {MAX_POINT_COUNT}"
                ),
            ));
        }
        if spacings < 3.0 {
            boundary.coarse_curves.push(index);
        }
        let n = target_point_count(length, spacing);
        let resampled = resample_curve_evenly(curve, n, interpolation, true);
        let working = if resample { resampled.clone() } else { curve.clone() };

        let offset = boundary.points.len();
        let count = working.len();
        boundary.points.extend_from_slice(working.points());
        boundary
            .constraints
            .extend((0..count).map(|i| [offset + i, offset + (i + 1) % count]));
        boundary.curve_ranges.push(offset..offset + count);

        debug!(curve = index, length, points = count, resampled = n, "prepared boundary curve");

        boundary.working_curves.push(working);
        boundary.resampled_curves.push(resampled);
    }

    Ok(boundary)
}
