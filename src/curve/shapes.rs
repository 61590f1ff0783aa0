//! Ready-made closed curves for common region outlines.

use super::Curve;
use crate::float_types::{Real, TAU};
use nalgebra::Point2;

impl Curve {
    /// Axis-aligned rectangle with its lower-left corner at the origin,
    /// counter-clockwise.
    ///
    /// # Example
    /// ```
    /// # use planar_mesher::curve::Curve;
    /// let r = Curve::rectangle(2.0, 3.0);
    /// assert_eq!(r.signed_area(), 6.0);
    /// ```
    pub fn rectangle(width: Real, length: Real) -> Self {
        Self::from_xy(&[[0.0, 0.0], [width, 0.0], [width, length], [0.0, length]])
    }

    pub fn square(width: Real) -> Self {
        Self::rectangle(width, width)
    }

    /// **Mathematical Foundation: Parametric Ellipse Discretization**
    ///
    /// ```text
    /// x(θ) = cx + rx·cos(θ)
    /// y(θ) = cy + ry·sin(θ),   θᵢ = 2πi/n
    /// ```
    /// Returns an empty curve for fewer than 3 segments.
    pub fn ellipse(center: [Real; 2], rx: Real, ry: Real, segments: usize) -> Self {
        if segments < 3 {
            return Self::default();
        }
        let points = (0..segments)
            .map(|i| {
                let theta = TAU * (i as Real) / (segments as Real);
                Point2::new(center[0] + rx * theta.cos(), center[1] + ry * theta.sin())
            })
            .collect();
        Self::new(points)
    }

    /// Circle of `radius` around `center`, see [`Curve::ellipse`].
    pub fn circle(center: [Real; 2], radius: Real, segments: usize) -> Self {
        Self::ellipse(center, radius, radius, segments)
    }

    /// Regular polygon inscribed in a circle of `radius` around the origin.
    pub fn regular_ngon(sides: usize, radius: Real) -> Self {
        Self::circle([0.0, 0.0], radius, sides)
    }

    /// Same points, opposite orientation.
    pub fn reversed(&self) -> Self {
        Self::new(self.points().iter().rev().copied().collect())
    }

    /// Translate every point by `(dx, dy)`.
    pub fn translated(&self, dx: Real, dy: Real) -> Self {
        Self::new(self.points().iter().map(|p| Point2::new(p.x + dx, p.y + dy)).collect())
    }
}
