pub mod vector_3d;

pub use vector_3d::{add, cross, dot, length, normalize, normalize_into, subtract};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance used when checking that a normal has unit length.
pub const UNIT_TOLERANCE: f64 = 1e-9;
