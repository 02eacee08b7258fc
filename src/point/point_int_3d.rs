use std::fmt;
use std::ops::Add;

use crate::coords::{HasXY, HasXYZ};
use crate::point::Point3D;
use crate::vector::Vector3D;

/// A position in 3D space with integer coordinates.
///
/// Same contract as [`PointInt2D`](crate::point::PointInt2D): distances are
/// computed in `f64`, and vector addition produces a [`Point3D`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointInt3D {
    /// X-coordinate.
    pub x: i64,
    /// Y-coordinate.
    pub y: i64,
    /// Z-coordinate.
    pub z: i64,
}

impl PointInt3D {
    /// Creates a new point from its coordinates.
    #[must_use]
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Returns the Euclidean distance to `other` as a float.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        Point3D::from(*self).distance_to(&Point3D::from(*other))
    }
}

impl HasXY for PointInt3D {
    type Scalar = i64;

    fn x(&self) -> i64 {
        self.x
    }

    fn y(&self) -> i64 {
        self.y
    }
}

impl HasXYZ for PointInt3D {
    fn z(&self) -> i64 {
        self.z
    }
}

/// Translates the point by a real-valued vector, producing a real point.
impl Add<Vector3D> for PointInt3D {
    type Output = Point3D;

    fn add(self, rhs: Vector3D) -> Point3D {
        Point3D::from(self) + rhs
    }
}

/// Widens integer coordinates to their floating-point counterparts.
#[allow(clippy::cast_precision_loss)]
impl From<PointInt3D> for Point3D {
    fn from(p: PointInt3D) -> Self {
        Self::new(p.x as f64, p.y as f64, p.z as f64)
    }
}

impl fmt::Display for PointInt3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
