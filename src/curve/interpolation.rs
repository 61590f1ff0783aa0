use crate::float_types::Real;
use nalgebra::Point2;

/// How points are evaluated between two consecutive curve points when a
/// curve is resampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Straight segments; samples stay on the input polyline.
    #[default]
    Linear,
    /// Uniform Catmull-Rom spline through the input points.
    CatmullRom,
}

impl Interpolation {
    /// Evaluate the segment `p1 → p2` at `u ∈ [0, 1]`.
    ///
    /// `p0` and `p3` are the neighbours before `p1` and after `p2`; linear
    /// interpolation ignores them.
    pub fn sample(
        self,
        p0: Point2<Real>,
        p1: Point2<Real>,
        p2: Point2<Real>,
        p3: Point2<Real>,
        u: Real,
    ) -> Point2<Real> {
        match self {
            Interpolation::Linear => p1 + (p2 - p1) * u,
            Interpolation::CatmullRom => catmull_rom(p0, p1, p2, p3, u),
        }
    }
}

/// **Mathematical Foundation: Uniform Catmull-Rom Spline**
///
/// ```text
/// p(u) = ½·[ 2p₁ + (p₂ − p₀)·u + (2p₀ − 5p₁ + 4p₂ − p₃)·u² + (3p₁ − p₀ − 3p₂ + p₃)·u³ ]
/// ```
/// Interpolating: p(0) = p₁, p(1) = p₂, with C¹ continuity across segments.
fn catmull_rom(
    p0: Point2<Real>,
    p1: Point2<Real>,
    p2: Point2<Real>,
    p3: Point2<Real>,
    u: Real,
) -> Point2<Real> {
    let u2 = u * u;
    let u3 = u2 * u;
    let (c0, c1, c2, c3) = (p0.coords, p1.coords, p2.coords, p3.coords);
    let v = (c1 * 2.0
        + (c2 - c0) * u
        + (c0 * 2.0 - c1 * 5.0 + c2 * 4.0 - c3) * u2
        + (c1 * 3.0 - c0 - c2 * 3.0 + c3) * u3)
        * 0.5;
    Point2::from(v)
}
