use crate::aabb::Aabb2;
use crate::float_types::{EQUILATERAL_HEIGHT, Real};
use nalgebra::Point2;

/// **Mathematical Foundation: Offset-Row Triangular Packing**
///
/// Rows are `h = s·√3/2` apart and hold points every `s`; odd rows are
/// shifted by `s/2`:
/// ```text
/// p(r, c) = (x₀ + c·s + (r mod 2)·s/2,  y₀ + r·h)
/// ```
/// Neighbouring points of adjacent rows are exactly `s` apart, so every
/// lattice triangle is equilateral. Columns and rows are counted with
/// `ceil` so the box is covered; odd rows may poke out by half a spacing.
pub fn brick_lattice(bounds: &Aabb2, spacing: Real) -> Vec<Point2<Real>> {
    if !(spacing > 0.0) {
        return Vec::new();
    }
    let dx = spacing;
    let dy = spacing * EQUILATERAL_HEIGHT;
    let columns = (bounds.width() / dx).ceil() as usize + 1;
    let rows = (bounds.height() / dy).ceil() as usize + 1;

    let mut points = Vec::with_capacity(rows * columns);
    for r in 0..rows {
        let y = bounds.mins.y + r as Real * dy;
        let shift = if r % 2 == 1 { 0.5 * dx } else { 0.0 };
        points.extend(
            (0..columns).map(|c| Point2::new(bounds.mins.x + shift + c as Real * dx, y)),
        );
    }
    points
}

/// **Mathematical Foundation: Equilateral Lattice**
///
/// All integer combinations of the basis vectors
/// ```text
/// a = (s, 0),   b = (s/2, s·√3/2)
/// p(i, j) = origin + i·a + j·b
/// ```
/// that fall inside `bounds`, with `origin = bounds.mins`. Row `j` starts at
/// the first `i` that lands at or right of the box's left edge.
pub fn equilateral_lattice(bounds: &Aabb2, spacing: Real) -> Vec<Point2<Real>> {
    if !(spacing > 0.0) {
        return Vec::new();
    }
    let h = spacing * EQUILATERAL_HEIGHT;
    let rows = (bounds.height() / h).floor() as i64;
    let mut points = Vec::new();

    for j in 0..=rows {
        let row_origin = bounds.mins.x + j as Real * 0.5 * spacing;
        let y = bounds.mins.y + j as Real * h;
        let first = ((bounds.mins.x - row_origin) / spacing).ceil() as i64;
        let last = ((bounds.maxs.x - row_origin) / spacing).floor() as i64;
        points.extend(
            (first..=last).map(|i| Point2::new(row_origin + i as Real * spacing, y)),
        );
    }
    points
}
