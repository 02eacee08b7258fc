use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};

use approx::{AbsDiffEq, RelativeEq};

use crate::coords::{hash_f64, HasXY};
use crate::error::{GeometryError, Result};

/// A displacement in 2D space.
///
/// Equality is exact per-component comparison; see [`approx::relative_eq!`]
/// for the tolerance-based alternative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2D {
    /// Creates a new vector from its components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean length (norm) of this vector.
    ///
    /// Equal to the distance of the point `(x, y)` from the origin.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the squared length, avoiding the square root.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the dot (scalar) product with `other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Checks whether this vector and `other` are scalar multiples of each
    /// other, by exact component-ratio comparison.
    ///
    /// Paired zero components short-circuit: if both x-components are zero,
    /// or both y-components are zero, the vectors are declared collinear
    /// without a ratio check. This keeps axis-aligned vectors out of the
    /// `0/0` branch, but it is not a fully rigorous test: the zero vector
    /// compares collinear with every axis-aligned vector.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_collinear_with(&self, other: &Self) -> bool {
        if self.x == 0.0 && other.x == 0.0 {
            return true;
        }
        if self.y == 0.0 && other.y == 0.0 {
            return true;
        }
        self.x / other.x == self.y / other.y
    }

    /// Returns the angle to `other` in radians, in `[0, π]`.
    ///
    /// When either vector has zero length the division inside the `acos`
    /// argument produces NaN, which is propagated to the caller. Use
    /// [`Vector2D::try_angle_with`] for an explicit error instead.
    #[must_use]
    pub fn angle_with(&self, other: &Self) -> f64 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Returns the angle to `other` in radians, in `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if either vector has zero
    /// length.
    #[allow(clippy::float_cmp)]
    pub fn try_angle_with(&self, other: &Self) -> Result<f64> {
        if self.length_squared() == 0.0 || other.length_squared() == 0.0 {
            return Err(GeometryError::ZeroVector);
        }
        Ok(self.angle_with(other))
    }

    /// Multiplies each component by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(scalar * self.x, scalar * self.y)
    }

    /// Returns the unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for the zero vector.
    #[allow(clippy::float_cmp)]
    pub fn normalize(&self) -> Result<Self> {
        let len = self.length();
        if len == 0.0 {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Self::new(self.x / len, self.y / len))
    }
}

impl HasXY for Vector2D {
    type Scalar = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// Componentwise vector sum.
impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Scalar multiplication, `v * s`.
impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        self.scale(rhs)
    }
}

/// Scalar multiplication, `s * v`.
impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs.scale(self)
    }
}

impl Hash for Vector2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.x, state);
        hash_f64(self.y, state);
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl From<Vector2D> for nalgebra::Vector2<f64> {
    fn from(v: Vector2D) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2D {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn equality_is_exact() {
        let v1 = Vector2D::new(1.0, 1.0);
        let v2 = Vector2D::new(1.0, 1.0);
        let v3 = Vector2D::new(1.0, 2.0);

        assert_eq!(v1, v2);
        assert_ne!(v1, v3);
        assert_ne!(v2, v3);
    }

    #[test]
    fn length_matches_origin_distance() {
        let v = Vector2D::new(1.0, 1.0);
        assert_eq!(v.length(), 2.0_f64.sqrt());

        let origin = crate::point::Point2D::new(0.0, 0.0);
        let tip = crate::point::Point2D::new(v.x, v.y);
        assert_eq!(v.length(), origin.distance_to(&tip));
    }

    #[test]
    fn collinear_scalar_multiples() {
        let v1 = Vector2D::new(1.0, 4.0);
        let v2 = Vector2D::new(-2.0, -8.0);
        let v3 = Vector2D::new(4.0, 10.0);

        assert!(v1.is_collinear_with(&v2));
        assert!(!v1.is_collinear_with(&v3));
        assert!(!v2.is_collinear_with(&v3));
    }

    #[test]
    fn collinear_axis_aligned_zero_guard() {
        let x1 = Vector2D::new(1.0, 0.0);
        let x2 = Vector2D::new(-2.0, 0.0);
        let x3 = Vector2D::new(3.0, 0.0);
        assert!(x1.is_collinear_with(&x2));
        assert!(x1.is_collinear_with(&x3));

        let y1 = Vector2D::new(0.0, 1.0);
        let y2 = Vector2D::new(0.0, 2.0);
        assert!(y1.is_collinear_with(&y2));

        // Perpendicular axis vectors fall through to the ratio check.
        assert!(!y1.is_collinear_with(&x1));
    }

    #[test]
    fn dot_of_orthogonal_is_zero() {
        let v1 = Vector2D::new(0.0, 1.0);
        let v2 = Vector2D::new(1.0, 0.0);
        assert_eq!(v1.dot(&v2), 0.0);
    }

    #[test]
    fn angle_of_orthogonal_unit_vectors() {
        let v1 = Vector2D::new(0.0, 1.0);
        let v2 = Vector2D::new(1.0, 0.0);
        assert_relative_eq!(v1.angle_with(&v2), FRAC_PI_2);
        assert_relative_eq!(v1.try_angle_with(&v2).unwrap(), FRAC_PI_2);
    }

    #[test]
    fn angle_with_zero_vector_is_nan() {
        let v = Vector2D::new(1.0, 0.0);
        let zero = Vector2D::new(0.0, 0.0);
        assert!(v.angle_with(&zero).is_nan());
    }

    #[test]
    fn try_angle_with_zero_vector_is_error() {
        let v = Vector2D::new(1.0, 0.0);
        let zero = Vector2D::new(0.0, 0.0);
        assert!(matches!(
            v.try_angle_with(&zero),
            Err(GeometryError::ZeroVector)
        ));
    }

    #[test]
    fn addition_identity() {
        let v1 = Vector2D::new(0.0, 1.0);
        let v2 = Vector2D::new(1.0, 0.0);
        assert_eq!(v1 + v2, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let v = Vector2D::new(1.0, 1.0);
        assert_eq!(2.0 * v, Vector2D::new(2.0, 2.0));
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v.scale(2.0), 2.0 * v);
    }

    #[test]
    fn normalize_nonzero() {
        let v = Vector2D::new(3.0, 4.0);
        let unit = v.normalize().unwrap();
        assert_relative_eq!(unit.length(), 1.0);
        assert_relative_eq!(unit, Vector2D::new(0.6, 0.8));
    }

    #[test]
    fn normalize_zero_is_error() {
        let zero = Vector2D::new(0.0, 0.0);
        assert!(matches!(zero.normalize(), Err(GeometryError::ZeroVector)));
    }

    #[test]
    fn display_format() {
        assert_eq!(Vector2D::new(1.0, 2.5).to_string(), "(1, 2.5)");
    }

    #[test]
    fn nalgebra_round_trip() {
        let v = Vector2D::new(0.5, -1.5);
        let na: nalgebra::Vector2<f64> = v.into();
        assert_eq!(Vector2D::from(na), v);
    }
}
