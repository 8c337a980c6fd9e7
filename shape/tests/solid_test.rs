use geometry::ray::Ray;
use itertools::iproduct;
use math::float::Float;
use math::hcm::{point3, vec3, Point3, Vec3};
use shape::{Element, Hit, Parallelogram, Polyhedron, TriangleTest};

fn square() -> Parallelogram {
    Parallelogram::new(
        point3(-1.0, 1.0, 0.0),
        point3(-1.0, -1.0, 0.0),
        point3(1.0, -1.0, 0.0),
    )
}

fn assert_same_hit(actual: Option<Hit>, expected: Option<Hit>) {
    match (actual, expected) {
        (None, None) => {}
        (Some(actual), Some(expected)) => {
            math::assert_close!(actual.pos, expected.pos);
            assert!(actual.t.dist_to(expected.t) < 1e-5, "{} vs {}", actual, expected);
        }
        _ => panic!("hit mismatch: {:?} vs {:?}", actual, expected),
    }
}

#[test]
fn parallelogram_derives_fourth_corner() {
    let p = Parallelogram::new(
        point3(0.0, 0.0, 0.0),
        point3(1.0, 0.0, 0.0),
        point3(2.0, 1.0, 0.5),
    );
    assert_eq!(p.d, point3(1.0, 1.0, 0.5));
    let (first, second) = p.triangles();
    assert_eq!(first.vertices(), [p.a, p.b, p.c]);
    assert_eq!(second.vertices(), [p.a, p.c, p.d]);
    assert_eq!(p.plane().normal, first.plane().normal);
    // Both halves face the same way.
    assert!(first.plane().normal.dot(second.plane().normal) > 0.0);
}

#[test]
fn parallelogram_hit_equals_triangle_hit() {
    let p = square();
    let (first, second) = p.triangles();
    let origin = point3(0.2, -0.1, 3.0);
    // Near the derived corner d = (1, 1, 0), which only the second triangle covers.
    let near_d = Ray::between(origin, point3(0.9, 0.9, 0.0));
    assert!(first.intersect_with(&near_d, TriangleTest::EdgeSide).is_none());
    assert_same_hit(p.intersect(&near_d), second.intersect_with(&near_d, TriangleTest::EdgeSide));
    assert!(p.intersect(&near_d).is_some());

    let near_b = Ray::between(origin, point3(-0.9, -0.9, 0.0));
    assert!(second.intersect_with(&near_b, TriangleTest::EdgeSide).is_none());
    assert_same_hit(p.intersect(&near_b), first.intersect_with(&near_b, TriangleTest::EdgeSide));
    assert!(p.intersect(&near_b).is_some());
}

#[test]
fn parallelogram_boundary() {
    let p = square();
    let origin = point3(0.25, 0.5, 2.0);
    for corner in p.corners().iter() {
        assert!(p.intersect(&Ray::between(origin, *corner)).is_none(), "{}", corner);
    }
    // Outer edges are outside.
    for on_edge in [point3(0.0, 1.0, 0.0), point3(1.0, 0.5, 0.0), point3(-1.0, 0.0, 0.0)].iter() {
        assert!(p.intersect(&Ray::between(origin, *on_edge)).is_none(), "{}", on_edge);
    }
    // The shared diagonal is not a seam.
    for on_diagonal in [point3(0.0, 0.0, 0.0), point3(0.5, -0.5, 0.0), point3(-0.75, 0.75, 0.0)].iter() {
        let hit = p
            .intersect(&Ray::between(origin, *on_diagonal))
            .unwrap_or_else(|| panic!("diagonal point {} missed", on_diagonal));
        math::assert_close!(hit.pos, *on_diagonal);
    }
    // Points on the diagonal's extension are outside.
    assert!(p.intersect(&Ray::between(origin, point3(1.5, -1.5, 0.0))).is_none());
}

#[test]
fn skewed_parallelogram_has_no_diagonal_seam() {
    let p = Parallelogram::new(
        point3(0.13, -0.71, 0.3),
        point3(1.9, 0.2, -0.4),
        point3(1.1, 1.7, 0.9),
    );
    let origin = point3(0.5, 0.2, 5.0);
    let steps = 2000;
    for i in 1..steps {
        let s = i as f32 / steps as f32;
        let on_diagonal = p.a + (p.c - p.a) * s;
        let hit = p
            .intersect(&Ray::between(origin, on_diagonal))
            .unwrap_or_else(|| panic!("diagonal point {} (s = {}) missed", on_diagonal, s));
        math::assert_close!(hit.pos, on_diagonal);
        assert!(hit.t.dist_to(1.0) < 1e-4);
    }
    // Just outside the corners on the diagonal's extension.
    for s in [-0.01f32, 1.01].iter().copied() {
        let outside = p.a + (p.c - p.a) * s;
        assert!(p.intersect(&Ray::between(origin, outside)).is_none(), "s = {}", s);
    }
}

#[test]
fn parallelogram_translation() {
    let p = square();
    let moved = p + vec3(0.0, 0.0, 2.0);
    assert_eq!(moved.d, point3(1.0, 1.0, 2.0));
    let ray = Ray::new(point3(0.3, 0.4, 5.0), -Vec3::Z);
    let hit = moved.intersect(&ray).unwrap();
    assert!(hit.t.dist_to(3.0) < 1e-5);
    assert_eq!(p.translated(vec3(0.0, 0.0, 2.0)).corners(), moved.corners());
}

#[test]
fn polyhedron_structure() {
    let box_ = Polyhedron::from_edges(
        point3(1.0, 1.0, 0.0),
        vec3(0.0, -2.0, 0.0),
        vec3(-2.0, 0.0, 0.0),
        vec3(0.0, 0.0, 2.0),
    );
    let vertices = box_.vertices();
    assert_eq!(vertices.len(), 8);
    assert_eq!(box_.faces().len(), 6);
    for (i, j) in iproduct!(0..8, 0..8) {
        if i < j {
            assert!(vertices[i].distance_to(vertices[j]) > 1.0, "{} and {}", i, j);
        }
    }
    // Every face corner is a vertex, and every vertex is on three faces.
    let is_vertex = |p: Point3| vertices.iter().any(|v| v.distance_to(p) < 1e-6);
    for face in box_.faces().iter() {
        assert!(face.corners().iter().all(|c| is_vertex(*c)));
    }
    for v in vertices.iter() {
        let count = box_
            .faces()
            .iter()
            .filter(|f| f.corners().iter().any(|c| c.distance_to(*v) < 1e-6))
            .count();
        assert_eq!(count, 3, "vertex {}", v);
    }
}

#[test]
fn polyhedron_nearest_face() {
    // A sheared box.
    let solid = Polyhedron::new(
        point3(0.0, 0.0, 0.0),
        point3(2.0, 0.0, 0.0),
        point3(0.5, 1.5, 0.0),
        point3(0.3, 0.2, 1.0),
    );
    let origin = point3(-3.0, -2.0, 4.0);
    for target in [point3(1.2, 0.7, 0.45), point3(0.9, 0.8, 0.1), point3(1.5, 0.4, 0.8)].iter() {
        let ray = Ray::between(origin, *target);
        let hit = solid.intersect(&ray).unwrap();
        let min_t = solid
            .faces()
            .iter()
            .filter_map(|f| f.intersect(&ray))
            .map(|h| h.t)
            .fold(f32::INFINITY, f32::min);
        assert_eq!(hit.t, min_t);
        // The target is inside, so the ray enters before reaching it.
        assert!(hit.t < 1.0);
        // Exactly two faces are crossed by a line through the interior.
        let crossings = solid
            .faces()
            .iter()
            .filter(|f| f.intersect(&ray).is_some())
            .count();
        assert_eq!(crossings, 2);
    }
}

#[test]
fn polyhedron_axis_aligned_entry() {
    let cube = Polyhedron::from_edges(
        point3(-1.0, -1.0, -1.0),
        vec3(2.0, 0.0, 0.0),
        vec3(0.0, 2.0, 0.0),
        vec3(0.0, 0.0, 2.0),
    );
    let ray = Ray::new(point3(0.3, -0.2, 5.0), -Vec3::Z);
    let hit = cube.intersect(&ray).unwrap();
    assert!(hit.t.dist_to(4.0) < 1e-5);
    math::assert_close!(hit.pos, point3(0.3, -0.2, 1.0));
    assert!(hit.normal.cross(Vec3::Z).norm() < 1e-5);

    // From inside, the exit face is hit.
    let inside = Ray::new(point3(0.3, -0.2, 0.0), -Vec3::Z);
    let hit = cube.intersect(&inside).unwrap();
    math::assert_close!(hit.pos, point3(0.3, -0.2, -1.0));

    let miss = Ray::new(point3(1.5, 0.0, 5.0), -Vec3::Z);
    assert!(cube.intersect(&miss).is_none());
    assert!(!cube.occludes(&miss));
    assert!(cube.occludes(&ray));
}
