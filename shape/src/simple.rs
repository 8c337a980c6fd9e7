use geometry::plane::{Plane, PARALLEL_EPSILON};
use geometry::ray::Ray;
use math::float::Float;
use math::hcm::{Point3, Vec3};
use math::GeometryError;
use std::f32::consts::PI;

use crate::{Element, Hit};

/// Angle sums above 2pi minus this are taken as "inside" by the angle-sum triangle test.
pub const ANGLE_SUM_EPSILON: f32 = 1e-3;

/// Both sphere roots are moved towards the ray origin by this much, so that a ray starting on
/// the sphere surface doesn't hit the sphere at t ~ 0.
pub const SPHERE_T_BIAS: f32 = 1e-6;

/// Algorithms to decide whether a ray hits a triangle. They agree on well-conditioned inputs; all
/// of them treat the triangle's edges and vertices as outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleTest {
    /// Intersects the plane, then checks the hit is on the inner side of each of the three edges.
    EdgeSide,
    /// Intersects the plane, then checks the angles the three edges subtend at the hit point sum
    /// up to 2pi. Less robust than the others near degenerate configurations.
    AngleSum,
    /// Moller-Trumbore: solves for t and the barycentric coordinates at once.
    Barycentric,
}

impl Default for TriangleTest {
    fn default() -> Self {
        TriangleTest::EdgeSide
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
    // ab, bc, ca
    edges: [Vec3; 3],
    plane: Plane,
    test: TriangleTest,
}

impl Triangle {
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            a,
            b,
            c,
            edges: [b - a, c - b, a - c],
            plane: Plane::new(a, b - a, c - a),
            test: TriangleTest::default(),
        }
    }

    /// Selects the algorithm used when the triangle is intersected as an `Element`.
    pub fn with_test(self, test: TriangleTest) -> Self {
        Self { test, ..self }
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn intersect_with(&self, r: &Ray, test: TriangleTest) -> Option<Hit> {
        match test {
            TriangleTest::EdgeSide => self.intersect_edge_side(r),
            TriangleTest::AngleSum => self.intersect_angle_sum(r),
            TriangleTest::Barycentric => self.intersect_barycentric(r),
        }
    }

    /// Intersects the ray with the triangle's plane; keeps the hit only if it's within the ray
    /// extent.
    pub(crate) fn plane_hit(&self, r: &Ray) -> Option<(Point3, f32)> {
        let (p, t) = self.plane.intersect(r)?;
        r.truncated_t(t).map(|t| (p, t))
    }

    /// For each edge (ab, bc, ca), computes `dot(normal, cross(edge, p - edge_start))`: positive
    /// iff `p` is on the inner side of that edge.
    pub(crate) fn edge_sides(&self, p: Point3) -> [f32; 3] {
        let starts = [self.a, self.b, self.c];
        let n = self.plane.normal;
        let mut sides = [0.0; 3];
        for i in 0..3 {
            sides[i] = n.dot(self.edges[i].cross(p - starts[i]));
        }
        sides
    }

    fn intersect_edge_side(&self, r: &Ray) -> Option<Hit> {
        let (p, t) = self.plane_hit(r)?;
        let inside = self.edge_sides(p).iter().all(|s| *s > 0.0);
        inside.then(|| Hit::new(p, t, self.plane.normal))
    }

    fn intersect_angle_sum(&self, r: &Ray) -> Option<Hit> {
        let (p, t) = self.plane_hit(r)?;
        // A hit exactly on a vertex has no direction towards that vertex: counted as a miss.
        let angle_sum = self.subtended_angle_sum(p).ok()?;
        // A NaN sum fails the comparison as well.
        (angle_sum > 2.0 * PI - ANGLE_SUM_EPSILON).then(|| Hit::new(p, t, self.plane.normal))
    }

    fn subtended_angle_sum(&self, p: Point3) -> Result<f32, GeometryError> {
        let ua = (self.a - p).hat()?;
        let ub = (self.b - p).hat()?;
        let uc = (self.c - p).hat()?;
        let angle = |u: Vec3, v: Vec3| u.dot(v).clamp_cos().acos();
        Ok(angle(ua, ub) + angle(ub, uc) + angle(uc, ua))
    }

    fn intersect_barycentric(&self, r: &Ray) -> Option<Hit> {
        let e1 = self.b - self.a;
        let e2 = self.c - self.a;
        // Solves o + td = a + u * e1 + v * e2 by Cramer's rule.
        let pvec = r.dir.cross(e2);
        let det = e1.dot(pvec);
        // |det| = |d dot (e1 x e2)|, same parallel test as the plane intersection.
        if !(det.abs() > PARALLEL_EPSILON * self.plane.normal.norm() * r.dir.norm()) {
            return None;
        }
        let inv_det = 1.0 / det;
        let tvec = r.origin - self.a;
        let u = tvec.dot(pvec) * inv_det;
        if !(u > 0.0 && u < 1.0) {
            return None;
        }
        let qvec = tvec.cross(e1);
        let v = r.dir.dot(qvec) * inv_det;
        if !(v > 0.0 && u + v < 1.0) {
            return None;
        }
        let t = r.truncated_t(e2.dot(qvec) * inv_det)?;
        Some(Hit::new(self.a + e1 * u + e2 * v, t, self.plane.normal))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }
    pub fn center(&self) -> Point3 {
        self.center
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

// Implementation of the `Element` trait for the shape implementations.

impl Element for Triangle {
    fn summary(&self) -> String {
        format!("Triangle[{}, {}, {}]", self.a, self.b, self.c)
    }
    fn intersect(&self, r: &Ray) -> Option<Hit> {
        self.intersect_with(r, self.test)
    }
}

impl Element for Sphere {
    fn summary(&self) -> String {
        format!("Sphere{{ {}, radius = {} }}", self.center, self.radius)
    }
    fn intersect(&self, r: &Ray) -> Option<Hit> {
        // r = o + td
        // sphere: (p-c)(p-c) = radius^2
        // t^2 d^2 + 2t d*(o-c) + (o-c)^2 - radius^2 = 0
        let oc = r.origin - self.center;
        let a = r.dir.norm_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(r.dir);
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if !(discriminant >= 0.0) {
            return None;
        }
        let sqrt_disc = discriminant.sqrt();
        let t_low = (-b - sqrt_disc) / (2.0 * a) - SPHERE_T_BIAS;
        let t_high = (-b + sqrt_disc) / (2.0 * a) - SPHERE_T_BIAS;
        // Keeps only the roots that are within the ray extent; the lower one wins if both are.
        let ray_t = match (r.truncated_t(t_low), r.truncated_t(t_high)) {
            (Some(low), _) => low,
            (None, Some(high)) => high,
            (None, None) => return None,
        };
        let pos = r.position_at(ray_t);
        Some(Hit::new(pos, ray_t, pos - self.center))
    }
}
