use math::hcm::{Point3, Vec3};

use crate::ray::Ray;

/// Rays whose direction makes a cosine smaller than this with the plane are taken as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane through `point`, spanned by two edge vectors. The normal is their cross product and is
/// not normalized: its length is twice the area of the triangle the edges span.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Point3, edge1: Vec3, edge2: Vec3) -> Self {
        Plane {
            point,
            normal: edge1.cross(edge2),
        }
    }

    /// Computes where the ray's supporting line meets the plane. Returns the point and the ray
    /// parameter t, which may be negative or outside the ray's extent; callers filter it.
    ///
    /// Returns `None` if the ray is parallel to the plane, or either the normal or the ray
    /// direction is zero.
    pub fn intersect(&self, r: &Ray) -> Option<(Point3, f32)> {
        // Plane: (p - point) dot n = 0. With p = o + td:
        // (point - o) dot n = t * (d dot n)
        let denom = self.normal.dot(r.dir);
        let scale = self.normal.norm() * r.dir.norm();
        if !(denom.abs() > PARALLEL_EPSILON * scale) {
            return None;
        }
        let t = self.normal.dot(self.point - r.origin) / denom;
        Some((r.position_at(t), t))
    }
}
