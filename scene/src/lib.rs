pub mod camera;
pub mod frame;
pub mod preset;
pub mod render;

use geometry::ray::Ray;
use light::Light;
use math::GeometryError;
use shape::{Element, Hit, Shape};

use camera::Camera;

/// Shadow rays start this far (in t) from the surface so that it doesn't shadow itself.
pub const SHADOW_BIAS: f32 = 1e-4;

/// Everything that can be seen: the shapes, the point lights that illuminate them, and the camera
/// that looks at them.
#[derive(Debug, Clone)]
pub struct Scene {
    pub elements: Vec<Shape>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            elements: vec![],
            lights: vec![],
            camera,
        }
    }

    pub fn with_elements(self, elements: Vec<Shape>) -> Self {
        Self { elements, ..self }
    }

    pub fn with_lights(self, lights: Vec<Light>) -> Self {
        Self { lights, ..self }
    }

    pub fn add_element<S: Into<Shape>>(&mut self, element: S) {
        self.elements.push(element.into());
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Finds the nearest hit of the ray among all elements. On a tie of t, the element added first
    /// wins.
    pub fn nearest_hit(&self, r: &Ray) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        for element in self.elements.iter() {
            if let Some(hit) = element.intersect(r) {
                if nearest.map_or(true, |n| hit.t < n.t) {
                    nearest = Some(hit);
                }
            }
        }
        nearest
    }

    /// Returns true if any element blocks the ray.
    pub fn occludes(&self, r: &Ray) -> bool {
        self.elements.iter().any(|e| e.occludes(r))
    }

    /// Computes how much of the light reaches the hit point: 0 if the segment toward the light is
    /// blocked, the unoccluded intensity of the light otherwise.
    pub fn light_contribution(&self, hit: &Hit, light: &Light) -> Result<f32, GeometryError> {
        let shadow_ray = Ray::between(hit.pos, light.position()).with_bias(SHADOW_BIAS);
        if self.occludes(&shadow_ray) {
            return Ok(0.0);
        }
        light.intensity_at(hit.normal, hit.pos)
    }
}
