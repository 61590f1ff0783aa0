use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

/// Axis-aligned bounding box in the XY plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    pub mins: Point2<Real>,
    pub maxs: Point2<Real>,
}

impl Aabb2 {
    #[inline]
    pub const fn new(mins: Point2<Real>, maxs: Point2<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box containing every point, `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2<Real>>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::new(first, first), |bb, p| Self {
            mins: Point2::new(bb.mins.x.min(p.x), bb.mins.y.min(p.y)),
            maxs: Point2::new(bb.maxs.x.max(p.x), bb.maxs.y.max(p.y)),
        }))
    }

    /// Grow the box by `margin` on every side.
    #[inline]
    pub fn expanded(&self, margin: Real) -> Self {
        let m = Vector2::new(margin, margin);
        Self { mins: self.mins - m, maxs: self.maxs + m }
    }

    #[inline]
    pub fn width(&self) -> Real {
        self.maxs.x - self.mins.x
    }

    #[inline]
    pub fn height(&self) -> Real {
        self.maxs.y - self.mins.y
    }

    #[inline]
    pub fn diagonal(&self) -> Real {
        (self.maxs - self.mins).norm()
    }

    #[inline]
    pub fn center(&self) -> Point2<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    #[inline]
    pub fn contains(&self, p: &Point2<Real>) -> bool {
        p.x >= self.mins.x && p.x <= self.maxs.x && p.y >= self.mins.y && p.y <= self.maxs.y
    }
}
