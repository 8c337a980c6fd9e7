/// Defines useful functions for common float operations:
/// - `Float` helper trait for scalar comparisons,
/// - Macros to check if two quantities are close, less than / greater than (or equal to) each other.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors.
/// - Function `hat()` to build a normalized `Vec3`, failing on zero-length vectors.
pub mod hcm;

mod error;

pub use error::GeometryError;
