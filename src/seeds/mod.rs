//! Interior seed points: a near-equilateral lattice over the region's
//! bounding box, thinned out near the boundary curves.

use crate::aabb::Aabb2;
use crate::float_types::{EQUILATERAL_HEIGHT, Real};
use nalgebra::Point2;

pub mod filter;
pub mod lattice;

pub use filter::{filter_seeds, min_distances, proximity_threshold};
pub use lattice::{brick_lattice, equilateral_lattice};

/// Which lattice generator lays out the candidate seeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedStrategy {
    /// Rectangular rows `spacing·√3/2` apart, every other row shifted by half
    /// a spacing.
    #[default]
    BrickGrid,
    /// Lattice spanned by the basis `{(s, 0), (s/2, s·√3/2)}`, clipped to the
    /// box.
    Equilateral,
}

/// Candidate seeds over `bounds` grown by one `spacing` on every side.
///
/// Both strategies give an expected edge length of `spacing` along the
/// densest direction.
pub fn generate_seeds(bounds: &Aabb2, spacing: Real, strategy: SeedStrategy) -> Vec<Point2<Real>> {
    let grown = bounds.expanded(spacing);
    match strategy {
        SeedStrategy::BrickGrid => brick_lattice(&grown, spacing),
        SeedStrategy::Equilateral => equilateral_lattice(&grown, spacing),
    }
}

/// Upper estimate of how many candidates [`generate_seeds`] yields for
/// `bounds`, computed without generating them.
pub fn candidate_count(bounds: &Aabb2, spacing: Real) -> Real {
    let grown = bounds.expanded(spacing);
    let columns = (grown.width() / spacing).ceil() + 1.0;
    let rows = (grown.height() / (spacing * EQUILATERAL_HEIGHT)).ceil() + 1.0;
    columns * rows
}
