pub mod coords;
pub mod error;
pub mod point;
pub mod vector;

pub use coords::{HasXY, HasXYZ};
pub use error::{GeometryError, Result};
pub use point::{Point2D, Point3D, PointInt2D, PointInt3D};
pub use vector::{Vector2D, Vector3D};
