use crate::float_types::{EQUILATERAL_HEIGHT, Real};
use nalgebra::Point2;
use rstar::RTree;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Seeds closer than this to the boundary are dropped: half the height of an
/// equilateral triangle with edge `spacing`.
#[inline]
pub fn proximity_threshold(spacing: Real) -> Real {
    0.5 * spacing * EQUILATERAL_HEIGHT
}

/// Distance from every point to its nearest reference point.
///
/// Nearest-neighbour queries run against an R-tree built once over
/// `reference`. An empty reference set yields infinite distances.
pub fn min_distances(points: &[Point2<Real>], reference: &[Point2<Real>]) -> Vec<Real> {
    let tree: RTree<[Real; 2]> = RTree::bulk_load(reference.iter().map(|p| [p.x, p.y]).collect());

    let distance = |p: &Point2<Real>| -> Real {
        tree.nearest_neighbor(&[p.x, p.y])
            .map(|q| (Point2::new(q[0], q[1]) - p).norm())
            .unwrap_or(Real::INFINITY)
    };

    #[cfg(feature = "parallel")]
    let distances = points.par_iter().map(distance).collect();

    #[cfg(not(feature = "parallel"))]
    let distances = points.iter().map(distance).collect();

    distances
}

/// Keep the candidates whose distance to `fine_boundary` is strictly greater
/// than [`proximity_threshold`], in their original order.
pub fn filter_seeds(
    candidates: &[Point2<Real>],
    fine_boundary: &[Point2<Real>],
    spacing: Real,
) -> Vec<Point2<Real>> {
    let threshold = proximity_threshold(spacing);
    candidates
        .iter()
        .zip(min_distances(candidates, fine_boundary))
        .filter(|&(_, d)| d > threshold)
        .map(|(p, _)| *p)
        .collect()
}
