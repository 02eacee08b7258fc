use std::fmt;
use std::ops::Add;

use crate::coords::HasXY;
use crate::point::Point2D;
use crate::vector::Vector2D;

/// A position in 2D space with integer coordinates.
///
/// Distance queries widen to `f64` before taking the square root, and
/// adding a vector produces a [`Point2D`], not an integer point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointInt2D {
    /// X-coordinate.
    pub x: i64,
    /// Y-coordinate.
    pub y: i64,
}

impl PointInt2D {
    /// Creates a new point from its coordinates.
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to `other` as a float.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        Point2D::from(*self).distance_to(&Point2D::from(*other))
    }
}

impl HasXY for PointInt2D {
    type Scalar = i64;

    fn x(&self) -> i64 {
        self.x
    }

    fn y(&self) -> i64 {
        self.y
    }
}

/// Translates the point by a real-valued vector, producing a real point.
impl Add<Vector2D> for PointInt2D {
    type Output = Point2D;

    fn add(self, rhs: Vector2D) -> Point2D {
        Point2D::from(self) + rhs
    }
}

/// Widens integer coordinates to their floating-point counterparts.
#[allow(clippy::cast_precision_loss)]
impl From<PointInt2D> for Point2D {
    fn from(p: PointInt2D) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

impl fmt::Display for PointInt2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
