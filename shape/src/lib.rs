mod hit;
mod simple;
mod solid;

use enum_dispatch::enum_dispatch;
use geometry::ray::Ray;

pub use hit::Hit;
pub use simple::*;
pub use solid::*;

/// Represents the capability shared by every shape of a scene: it can be hit by a ray.
/// - See `simple.rs` for basic shape implementations: `Triangle` and `Sphere`.
/// - See `solid.rs` for shapes composed of triangles: `Parallelogram` and `Polyhedron`.
#[enum_dispatch]
pub trait Element: Send + Sync {
    fn summary(&self) -> String;

    /// Computes the nearest intersection of the ray with the shape whose t lies within the ray's
    /// extent, or `None` if there isn't one.
    fn intersect(&self, r: &Ray) -> Option<Hit>;

    /// Returns true if the ray hits the shape anywhere within its extent.
    fn occludes(&self, r: &Ray) -> bool {
        self.intersect(r).is_some()
    }
}

/// All shapes that can be placed into a scene.
#[enum_dispatch(Element)]
#[derive(Debug, Clone)]
pub enum Shape {
    Triangle,
    Parallelogram,
    Polyhedron,
    Sphere,
}
