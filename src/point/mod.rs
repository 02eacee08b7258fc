//! Point types: positions in 2D or 3D space.
//!
//! Points carry coordinates only. Displacements between points are
//! expressed with the [`crate::vector`] types; adding a vector to a point
//! yields a translated point.

mod point_2d;
mod point_3d;
mod point_int_2d;
mod point_int_3d;

pub use point_2d::Point2D;
pub use point_3d::Point3D;
pub use point_int_2d::PointInt2D;
pub use point_int_3d::PointInt3D;
