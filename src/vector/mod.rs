//! Vector types: displacements with direction and magnitude.

mod vector_2d;
mod vector_3d;

pub use vector_2d::Vector2D;
pub use vector_3d::Vector3D;
