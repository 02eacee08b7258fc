use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};

use approx::{AbsDiffEq, RelativeEq};

use crate::coords::{hash_f64, HasXY, HasXYZ};
use crate::error::{GeometryError, Result};

/// A displacement in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3D {
    /// Creates a new vector from its components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the Euclidean length (norm) of this vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the squared length, avoiding the square root.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the dot (scalar) product with `other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with `other`.
    ///
    /// The result is the zero vector exactly when the two vectors span no
    /// plane, which makes it the rigorous counterpart to the ratio-based
    /// [`Vector3D::is_collinear_with`].
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Checks whether this vector and `other` are scalar multiples of each
    /// other, by exact component-ratio comparison.
    ///
    /// Unlike the 2D variant there is no guard for zero components: IEEE
    /// division yields `±∞` or NaN and the comparison proceeds on those
    /// values, so axis-aligned and zero vectors compare not collinear even
    /// when they geometrically are. Use [`Vector3D::cross`] when that edge
    /// matters.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_collinear_with(&self, other: &Self) -> bool {
        let rx = self.x / other.x;
        let ry = self.y / other.y;
        let rz = self.z / other.z;
        rx == ry && ry == rz
    }

    /// Returns the angle to `other` in radians, in `[0, π]`.
    ///
    /// Propagates NaN when either vector has zero length; see
    /// [`Vector3D::try_angle_with`] for an explicit error.
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
        Self::new(scalar * self.x, scalar * self.y, scalar * self.z)
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
        Ok(Self::new(self.x / len, self.y / len, self.z / len))
    }
}

impl HasXY for Vector3D {
    type Scalar = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl HasXYZ for Vector3D {
    fn z(&self) -> f64 {
        self.z
    }
}

/// Componentwise vector sum.
impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Scalar multiplication, `v * s`.
impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Vector3D {
        self.scale(rhs)
    }
}

/// Scalar multiplication, `s * v`.
impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Vector3D {
        rhs.scale(self)
    }
}

impl Hash for Vector3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.x, state);
        hash_f64(self.y, state);
        hash_f64(self.z, state);
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl RelativeEq for Vector3D {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && f64::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl From<Vector3D> for nalgebra::Vector3<f64> {
    fn from(v: Vector3D) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3D {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
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
        let v1 = Vector3D::new(1.0, 1.0, 1.0);
        let v2 = Vector3D::new(1.0, 1.0, 1.0);
        let v3 = Vector3D::new(1.0, 2.0, 3.0);

        assert_eq!(v1, v2);
        assert_ne!(v1, v3);
        assert_ne!(v2, v3);
    }

    #[test]
    fn length_matches_origin_distance() {
        let v = Vector3D::new(1.0, 1.0, 1.0);
        assert_eq!(v.length(), 3.0_f64.sqrt());

        let origin = crate::point::Point3D::new(0.0, 0.0, 0.0);
        let tip = crate::point::Point3D::new(v.x, v.y, v.z);
        assert_eq!(v.length(), origin.distance_to(&tip));
    }

    #[test]
    fn collinear_scalar_multiples() {
        let v1 = Vector3D::new(1.0, 4.0, 8.0);
        let v2 = Vector3D::new(-2.0, -8.0, -16.0);
        let v3 = Vector3D::new(4.0, 10.0, 20.0);

        assert!(v1.is_collinear_with(&v2));
        assert!(!v1.is_collinear_with(&v3));
        assert!(!v2.is_collinear_with(&v3));
    }

    #[test]
    fn collinear_has_no_zero_guard() {
        // Geometrically collinear, but the unguarded 0/0 ratio is NaN,
        // which compares unequal to everything. Pinned behavior.
        let v1 = Vector3D::new(0.0, 1.0, 1.0);
        let v2 = Vector3D::new(0.0, 2.0, 2.0);
        assert!(!v1.is_collinear_with(&v2));

        // The cross product catches the same pair.
        assert_eq!(v1.cross(&v2), Vector3D::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_of_collinear_is_zero() {
        let v = Vector3D::new(1.0, 4.0, 8.0);
        let w = v.scale(-2.0);
        assert_eq!(v.cross(&w), Vector3D::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn dot_and_angle_of_orthogonal_vectors() {
        let v1 = Vector3D::new(0.0, 1.0, 0.0);
        let v2 = Vector3D::new(1.0, 0.0, 0.0);
        assert_eq!(v1.dot(&v2), 0.0);
        assert_relative_eq!(v1.angle_with(&v2), FRAC_PI_2);
        assert_relative_eq!(v1.try_angle_with(&v2).unwrap(), FRAC_PI_2);
    }

    #[test]
    fn angle_with_zero_vector() {
        let v = Vector3D::new(1.0, 0.0, 0.0);
        let zero = Vector3D::new(0.0, 0.0, 0.0);
        assert!(v.angle_with(&zero).is_nan());
        assert!(matches!(
            v.try_angle_with(&zero),
            Err(GeometryError::ZeroVector)
        ));
    }

    #[test]
    fn addition_is_componentwise() {
        let v1 = Vector3D::new(0.0, 1.0, 1.0);
        let v2 = Vector3D::new(1.0, 0.0, 1.0);
        assert_eq!(v1 + v2, Vector3D::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let v = Vector3D::new(1.0, -2.0, 3.0);
        assert_eq!(2.0 * v, Vector3D::new(2.0, -4.0, 6.0));
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v.scale(2.0), 2.0 * v);
    }

    #[test]
    fn normalize_nonzero() {
        let v = Vector3D::new(0.0, 3.0, 4.0);
        let unit = v.normalize().unwrap();
        assert_relative_eq!(unit.length(), 1.0);
        assert_relative_eq!(unit, Vector3D::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn normalize_zero_is_error() {
        let zero = Vector3D::new(0.0, 0.0, 0.0);
        assert!(matches!(zero.normalize(), Err(GeometryError::ZeroVector)));
    }

    #[test]
    fn display_format() {
        assert_eq!(Vector3D::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
    }

    #[test]
    fn nalgebra_round_trip() {
        let v = Vector3D::new(0.5, -1.5, 2.5);
        let na: nalgebra::Vector3<f64> = v.into();
        assert_eq!(Vector3D::from(na), v);
    }
}
