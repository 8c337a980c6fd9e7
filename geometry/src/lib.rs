/// Defines the `Plane` type and the ray-plane intersection routine.
pub mod plane;
pub mod ray;

pub use plane::Plane;
pub use ray::Ray;
