//! Closed planar curves and the curve utilities the mesher relies on:
//! arc length, even resampling and subdivision.

use crate::aabb::Aabb2;
use crate::errors::MeshingError;
use crate::float_types::{Real, tolerance};
use geo::{Coord, LineString};
use nalgebra::Point2;

pub mod interpolation;
pub mod shapes;

pub use interpolation::Interpolation;

/// An ordered, implicitly closed sequence of points in the XY plane.
///
/// The last point connects back to the first. A trailing point equal to the
/// first one is accepted and dropped on construction, so rings coming from
/// `geo` (which repeat the first coordinate) can be used as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    points: Vec<Point2<Real>>,
}

impl Curve {
    pub fn new(mut points: Vec<Point2<Real>>) -> Self {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points }
    }

    /// Build a curve from `[x, y]` pairs.
    ///
    /// # Example
    /// ```
    /// # use planar_mesher::curve::Curve;
    /// let square = Curve::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    /// assert_eq!(square.len(), 4);
    /// ```
    pub fn from_xy(points: &[[Real; 2]]) -> Self {
        Self::new(points.iter().map(|&[x, y]| Point2::new(x, y)).collect())
    }

    #[inline]
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point2<Real>> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate the closed loop of segments, including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    pub fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.points)
    }

    /// Shoelace area, positive for counter-clockwise curves.
    pub fn signed_area(&self) -> Real {
        0.5 * self
            .segments()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<Real>()
    }

    /// Check the invariants the mesher relies on: finite coordinates, at least
    /// three distinct points and a closed length above tolerance.
    ///
    /// `index` only labels the error.
    pub fn validate(&self, index: usize) -> Result<(), MeshingError> {
        if let Some(p) = self.points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(MeshingError::invalid_curve(
                index,
                format!("non-finite coordinate ({}, {})", p.x, p.y),
            ));
        }

        let eps = tolerance();
        let mut distinct: Vec<Point2<Real>> = Vec::with_capacity(3);
        for p in &self.points {
            if distinct.iter().all(|q| (p - q).norm() > eps) {
                distinct.push(*p);
                if distinct.len() == 3 {
                    break;
                }
            }
        }
        if distinct.len() < 3 {
            return Err(MeshingError::invalid_curve(
                index,
                format!("needs at least 3 distinct points, found {}", distinct.len()),
            ));
        }

        if let Some(i) = self.segments().position(|(a, b)| (b - a).norm() <= eps) {
            let j = (i + 1) % self.points.len();
            return Err(MeshingError::invalid_curve(
                index,
                format!("points {i} and {j} coincide"),
            ));
        }

        let length = curve_length(self);
        if length <= eps {
            return Err(MeshingError::invalid_curve(index, format!("degenerate length {length}")));
        }
        Ok(())
    }

    /// The curve as an explicitly closed `geo` ring.
    pub fn to_line_string(&self) -> LineString<Real> {
        let mut coords: Vec<Coord<Real>> =
            self.points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        LineString::new(coords)
    }
}

impl From<Vec<Point2<Real>>> for Curve {
    fn from(points: Vec<Point2<Real>>) -> Self {
        Self::new(points)
    }
}

impl From<&LineString<Real>> for Curve {
    fn from(ring: &LineString<Real>) -> Self {
        Self::new(ring.coords().map(|c| Point2::new(c.x, c.y)).collect())
    }
}

/// Length of the closed loop, including the closing segment.
pub fn curve_length(curve: &Curve) -> Real {
    curve.segments().map(|(a, b)| (b - a).norm()).sum()
}

/// Cumulative arc length at every vertex, plus the total at the end.
///
/// For a closed curve the last entry is the full loop length; for an open one
/// it is the length up to the last point.
fn cumulative_lengths(points: &[Point2<Real>], closed: bool) -> Vec<Real> {
    let n = points.len();
    let segment_count = if closed { n } else { n.saturating_sub(1) };
    let mut cumulative = Vec::with_capacity(segment_count + 1);
    cumulative.push(0.0);
    let mut total = 0.0;
    for i in 0..segment_count {
        total += (points[(i + 1) % n] - points[i]).norm();
        cumulative.push(total);
    }
    cumulative
}

/// **Mathematical Foundation: Arc-Length Parameterised Resampling**
///
/// Place `n` points at equal arc-length intervals along the curve, starting
/// at its first point.
///
/// ## **Sampling Positions**
/// With total length `L`:
/// ```text
/// closed: sᵢ = i·L/n,       i ∈ {0, …, n-1}
/// open:   sᵢ = i·L/(n-1),   i ∈ {0, …, n-1}
/// ```
/// Each `sᵢ` is located on its segment and evaluated with `method`. Linear
/// interpolation keeps the samples on the input polyline; Catmull-Rom passes
/// through the input points and rounds the corners in between.
///
/// Returns an empty curve for `n == 0` or an empty input, and copies of the
/// single point for a one-point input.
pub fn resample_curve_evenly(
    curve: &Curve,
    n: usize,
    method: Interpolation,
    closed: bool,
) -> Curve {
    let points = curve.points();
    if n == 0 || points.is_empty() {
        return Curve::default();
    }
    if points.len() == 1 {
        return Curve { points: vec![points[0]; n] };
    }

    let cumulative = cumulative_lengths(points, closed);
    let total = *cumulative.last().unwrap_or(&0.0);
    if total <= Real::EPSILON {
        return Curve { points: vec![points[0]; n] };
    }

    let step = if closed || n == 1 { total / n as Real } else { total / (n - 1) as Real };
    let count = points.len();
    let mut segment = 0;
    let mut samples = Vec::with_capacity(n);

    for i in 0..n {
        let target = (step * i as Real).min(total);
        while segment + 1 < cumulative.len() - 1 && cumulative[segment + 1] <= target {
            segment += 1;
        }
        let start = cumulative[segment];
        let span = cumulative[segment + 1] - start;
        let u = if span > Real::EPSILON { ((target - start) / span).clamp(0.0, 1.0) } else { 0.0 };

        let neighbour = |offset: isize| -> Point2<Real> {
            let raw = segment as isize + offset;
            if closed {
                points[raw.rem_euclid(count as isize) as usize]
            } else {
                points[raw.clamp(0, count as isize - 1) as usize]
            }
        };
        samples.push(method.sample(neighbour(-1), neighbour(0), neighbour(1), neighbour(2), u));
    }

    Curve { points: samples }
}

/// Split every segment of the closed curve into `factor` equal pieces.
///
/// The original points are kept; `factor - 1` points are inserted in each
/// segment. A factor of 0 or 1 returns the curve unchanged.
pub fn subdivide_curve(curve: &Curve, factor: usize) -> Curve {
    if factor <= 1 || curve.len() < 2 {
        return curve.clone();
    }
    let mut points = Vec::with_capacity(curve.len() * factor);
    for (a, b) in curve.segments() {
        for k in 0..factor {
            let t = k as Real / factor as Real;
            points.push(a + (b - a) * t);
        }
    }
    Curve { points }
}
