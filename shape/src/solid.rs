use geometry::plane::Plane;
use geometry::ray::Ray;
use math::hcm::{Point3, Vec3};
use std::ops::Add;

use crate::{Element, Hit, Triangle, TriangleTest};

/// A parallelogram with corners a, b, c, d, where d = a + c - b is opposite to b.
///
/// For intersection purposes it is split along the diagonal ac into the triangles (a, b, c) and
/// (a, c, d).
#[derive(Debug, Clone, Copy)]
pub struct Parallelogram {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
    pub d: Point3,
    first: Triangle,
    second: Triangle,
}

impl Parallelogram {
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        let d = a + (c - b);
        Self {
            a,
            b,
            c,
            d,
            first: Triangle::new(a, b, c),
            second: Triangle::new(a, c, d),
        }
    }

    /// The plane of the first triangle (a, b, c).
    pub fn plane(&self) -> &Plane {
        self.first.plane()
    }

    pub fn triangles(&self) -> (&Triangle, &Triangle) {
        (&self.first, &self.second)
    }

    pub fn corners(&self) -> [Point3; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn translated(&self, v: Vec3) -> Self {
        Self::new(self.a + v, self.b + v, self.c + v)
    }
}

impl Add<Vec3> for Parallelogram {
    type Output = Parallelogram;
    fn add(self, v: Vec3) -> Parallelogram {
        self.translated(v)
    }
}

impl Element for Parallelogram {
    fn summary(&self) -> String {
        format!(
            "Parallelogram[{}, {}, {}, {}]",
            self.a, self.b, self.c, self.d
        )
    }

    fn intersect(&self, r: &Ray) -> Option<Hit> {
        let hit = self
            .first
            .intersect_with(r, TriangleTest::EdgeSide)
            .or_else(|| self.second.intersect_with(r, TriangleTest::EdgeSide));
        if hit.is_some() {
            return hit;
        }
        // Both triangles leave out their edges, including the shared diagonal ac, which rounding
        // may put on the outer side of both. Points near it are tested against the four outer
        // edges instead, and belong to the first triangle.
        let (p, t) = self.first.plane_hit(r)?;
        let [ab, bc, _] = self.first.edge_sides(p);
        let [_, cd, da] = self.second.edge_sides(p);
        let inside = [ab, bc, cd, da].iter().all(|s| *s > 0.0);
        inside.then(|| Hit::new(p, t, self.plane().normal))
    }
}

/// A six-faced solid with parallelogram faces, e.g., a box, possibly sheared.
#[derive(Debug, Clone)]
pub struct Polyhedron {
    vertices: [Point3; 8],
    faces: [Parallelogram; 6],
}

impl Polyhedron {
    /// Builds the polyhedron from a corner `p1` and the other ends `p2`, `p3`, `p4` of the three
    /// edges leaving `p1`.
    pub fn new(p1: Point3, p2: Point3, p3: Point3, p4: Point3) -> Self {
        let (u, v, w) = (p2 - p1, p3 - p1, p4 - p1);
        let v5 = p4 + u;
        let vertices = [p1, p2, p2 + v, p3, p4, v5, v5 + v, p3 + w];
        let [v0, v1, _, v3, v4, ..] = vertices;

        // Three faces through v0, and their copies translated along the remaining edge.
        let f0 = Parallelogram::new(v1, v0, v4);
        let f1 = Parallelogram::new(v3, v0, v4);
        let f2 = Parallelogram::new(v1, v0, v3);
        let faces = [f0, f1, f2, f0 + (v3 - v0), f1 + (v1 - v0), f2 + (v4 - v0)];
        Self { vertices, faces }
    }

    /// Builds the polyhedron from a corner and three edge vectors leaving it.
    pub fn from_edges(origin: Point3, u: Vec3, v: Vec3, w: Vec3) -> Self {
        Self::new(origin, origin + u, origin + v, origin + w)
    }

    pub fn vertices(&self) -> &[Point3; 8] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Parallelogram; 6] {
        &self.faces
    }
}

impl Element for Polyhedron {
    fn summary(&self) -> String {
        format!(
            "Polyhedron[{} + ({}, {}, {})]",
            self.vertices[0],
            self.vertices[1] - self.vertices[0],
            self.vertices[3] - self.vertices[0],
            self.vertices[4] - self.vertices[0]
        )
    }

    fn intersect(&self, r: &Ray) -> Option<Hit> {
        // Keeps the nearest face hit, the first one on ties.
        self.faces
            .iter()
            .filter_map(|face| face.intersect(r))
            .fold(None, |nearest: Option<Hit>, hit| match nearest {
                Some(nearest) if nearest.t <= hit.t => Some(nearest),
                _ => Some(hit),
            })
    }

    fn occludes(&self, r: &Ray) -> bool {
        self.faces.iter().any(|face| face.occludes(r))
    }
}
