//! Coordinate-access traits shared by the point and vector types.
//!
//! These replace an interface hierarchy with two small capability traits:
//! anything with x- and y-coordinates implements [`HasXY`], and 3D types
//! additionally implement [`HasXYZ`]. Only two scalar instantiations exist
//! in the crate (`f64` and `i64`).

/// Access to the x- and y-coordinates of a 2D value.
pub trait HasXY {
    /// Scalar type of the coordinates.
    type Scalar: Copy;

    /// Returns the x-coordinate.
    fn x(&self) -> Self::Scalar;

    /// Returns the y-coordinate.
    fn y(&self) -> Self::Scalar;
}

/// Access to the z-coordinate, in addition to x and y.
pub trait HasXYZ: HasXY {
    /// Returns the z-coordinate.
    fn z(&self) -> Self::Scalar;
}

/// Feeds an `f64` coordinate into a hasher so that values comparing equal
/// hash equal. `-0.0` is normalized to `0.0` before taking the bit pattern;
/// NaN never compares equal to anything, so it cannot break the contract.
#[allow(clippy::float_cmp)]
pub(crate) fn hash_f64<H: std::hash::Hasher>(value: f64, state: &mut H) {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    state.write_u64(bits);
}
