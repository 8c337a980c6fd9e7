use light::Light;
use math::hcm::{point3, vec3, Point3};
use shape::{Parallelogram, Polyhedron, Sphere, Triangle, TriangleTest};

use crate::camera::{Camera, CameraError, Sensor};
use crate::Scene;

// Functions that build the demo scenes: camera, collection of elements and lights.
// ------------------------------------------------------------------------------------------------

/// Names of the scenes that `by_name` accepts.
pub const SCENE_NAMES: [&str; 3] = ["blocks", "square", "shapes"];

/// Builds the named scene with the given image resolution, or `None` if no scene has that name.
pub fn by_name(name: &str, resolution: (u32, u32)) -> Option<Result<Scene, CameraError>> {
    match name {
        "blocks" => Some(blocks(resolution)),
        "square" => Some(lit_square(resolution)),
        "shapes" => Some(shapes(resolution)),
        _ => None,
    }
}

/// Two boxes resting on a large floor, the upper one turned by 30 degrees around the z-axis, lit
/// by a single point light high above.
pub fn blocks(resolution: (u32, u32)) -> Result<Scene, CameraError> {
    let camera = Camera::looking(
        Point3::from(vec3(2.0, -4.0, 4.0) * 1.5),
        vec3(-0.5, 1.0, -0.75).hat()?,
        1.2,
        resolution,
    )?;

    let floor = Parallelogram::new(
        point3(-10.0, 10.0, 0.0),
        point3(-10.0, -10.0, 0.0),
        point3(10.0, -10.0, 0.0),
    );
    let lower = Polyhedron::new(
        point3(1.0, 1.0, 0.0),
        point3(1.0, -1.0, 0.0),
        point3(-1.0, 1.0, 0.0),
        point3(1.0, 1.0, 2.0),
    );
    // cos(30deg) = 0.866025404
    let upper = Polyhedron::new(
        point3(0.866025404, 0.5, 2.0),
        point3(0.5, -0.866025404, 2.0),
        point3(-0.5, 0.866025404, 2.0),
        point3(0.866025404, 0.5, 3.41),
    );

    let mut scene = Scene::new(camera);
    scene.add_element(floor);
    scene.add_element(lower);
    scene.add_element(upper);
    scene.add_light(Light::point(point3(20.0, -14.0, 30.0), 4000.0));
    Ok(scene)
}

/// A unit square on the z = 0 plane lit from straight above, seen through a sensor that covers
/// [-0.9, 0.9] x [-0.9, 0.9] of the plane. The square covers the middle of the image and the
/// corners show the empty background.
pub fn lit_square(resolution: (u32, u32)) -> Result<Scene, CameraError> {
    let (width, height) = resolution;
    // The sensor is 1 unit below the camera, and the square 4 units below.
    let half_w = 0.225;
    let half_h = half_w * height as f32 / width as f32;
    let border = Parallelogram::new(
        point3(-half_w, half_h, 3.0),
        point3(-half_w, -half_h, 3.0),
        point3(half_w, -half_h, 3.0),
    );
    let camera = Camera::new(point3(0.0, 0.0, 4.0), Sensor::new(border, width, height)?);

    let square = Parallelogram::new(
        point3(-0.5, -0.5, 0.0),
        point3(0.5, -0.5, 0.0),
        point3(0.5, 0.5, 0.0),
    );
    Ok(Scene::new(camera)
        .with_elements(vec![square.into()])
        .with_lights(vec![Light::point(point3(0.0, 0.0, 5.0), 1.0)]))
}

/// One of each kind of element on a floor, lit by a point light and a spot light.
pub fn shapes(resolution: (u32, u32)) -> Result<Scene, CameraError> {
    let camera = Camera::looking(
        point3(0.0, -8.0, 4.0),
        vec3(0.0, 1.0, -0.45).hat()?,
        1.0,
        resolution,
    )?;

    let floor = Parallelogram::new(
        point3(-10.0, 10.0, 0.0),
        point3(-10.0, -10.0, 0.0),
        point3(10.0, -10.0, 0.0),
    );
    let ball = Sphere::new(point3(-2.2, 0.5, 1.0), 1.0);
    let block = Polyhedron::from_edges(
        point3(-0.6, -0.2, 0.0),
        vec3(1.2, 0.4, 0.0),
        vec3(-0.4, 1.2, 0.0),
        vec3(0.0, 0.0, 1.5),
    );
    let sail = Triangle::new(
        point3(1.5, 1.0, 0.0),
        point3(3.5, 1.5, 0.0),
        point3(2.4, 1.2, 2.6),
    )
    .with_test(TriangleTest::Barycentric);
    let moon = Sphere::new(point3(0.0, 1.0, 2.2), 0.35);

    let mut scene = Scene::new(camera).with_elements(vec![
        floor.into(),
        ball.into(),
        block.into(),
        sail.into(),
        moon.into(),
    ]);
    scene.add_light(Light::point(point3(6.0, -6.0, 12.0), 600.0));
    scene.add_light(Light::spot(point3(-4.0, -3.0, 6.0), 150.0, 0.4));
    Ok(scene)
}
