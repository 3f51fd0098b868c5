//! Axis-aligned bounding volume of a vertex set.

use nalgebra::Point3;

use crate::real::Float;
use crate::Quadrant;

/// Axis-Aligned Bounding Box.
///
/// Z bounds are carried for symmetry even though quadrant classification
/// only ever looks at X and Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<Real: Float> {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl<Real: Float> Aabb<Real> {
    #[inline]
    pub fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Determine the bounds of a set of points.
    ///
    /// Returns `None` for an empty set, for which the bounds (and therefore
    /// the center) are undefined.
    pub fn from_points(points: &[Point3<Real>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut res = Self::new(*first, *first);
        for p in rest {
            res.mins = res.mins.inf(p);
            res.maxs = res.maxs.sup(p);
        }
        Some(res)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<Real> {
        let Self { mins: i, maxs: a } = self;
        nalgebra::point![
            (i.x + a.x) / Real::TWO,
            (i.y + a.y) / Real::TWO,
            (i.z + a.z) / Real::TWO
        ]
    }

    /// Determine the [Quadrant] of `p`.
    ///
    /// This still works even if `p` lies outside `self`: the result is given
    /// as if taking the quadrant of `p` within an infinitely-large bounding
    /// box sharing a center with `self`.
    #[inline]
    pub fn quadrant_of(&self, p: &Point3<Real>) -> Quadrant {
        Quadrant::from_center(&self.center(), p)
    }
}
