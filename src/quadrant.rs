use nalgebra::Point3;

use crate::real::Float;

/// A way to refer to the four X/Y quadrants around a center point.
///
/// # Diagram
/// `ES>L`, where `E`/`S` are the east/south bits and `L` is the 1-based
/// label used in output file names.
/// <pre>
///         N
/// -------------
/// |00>1 |01>2 |
/// |-----|-----|--- E
/// |10>3 |11>4 |
/// -------------
/// </pre>
///
/// A point exactly on the vertical center line counts as west, and a point
/// exactly on the horizontal center line counts as north, so the four
/// quadrants are mutually exclusive and exhaustive over every (X, Y) pair.
/// Z is never considered.
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Quadrant(pub u8);

impl Quadrant {
    /// Iterator through all four quadrants, in label order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..4).map(Self)
    }

    /// Construct a Quadrant from its east/south components.
    #[inline]
    pub fn new(east: bool, south: bool) -> Self {
        Self(((south as u8) << 1) | east as u8)
    }

    /// Find the Quadrant of a point `p` relative to a center point `c`.
    #[inline]
    pub fn from_center<Real: Float>(c: &Point3<Real>, p: &Point3<Real>) -> Self {
        Self::new(p.x > c.x, p.y < c.y)
    }

    /// The east component of self: `true` for quadrants 2 and 4.
    #[inline]
    pub fn east(self) -> bool {
        self.0 & 0b01 != 0
    }

    /// The south component of self: `true` for quadrants 3 and 4.
    #[inline]
    pub fn south(self) -> bool {
        self.0 & 0b10 != 0
    }

    /// The 1-based label of self, as used in output file names.
    #[inline]
    pub fn label(self) -> u8 {
        self.0 + 1
    }
}

impl From<Quadrant> for usize {
    fn from(q: Quadrant) -> Self {
        q.0 as usize
    }
}

impl From<Quadrant> for u8 {
    fn from(q: Quadrant) -> Self {
        q.0
    }
}
