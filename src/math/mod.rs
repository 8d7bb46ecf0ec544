//! Geometry primitives: points/vectors and homogeneous transforms.

pub mod transform;
pub mod vec3;

pub use transform::Transform;
pub use vec3::{GeometryError, Vec3};
