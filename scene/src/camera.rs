use geometry::ray::Ray;
use math::hcm::{Point3, Vec3};
use math::GeometryError;
use shape::Parallelogram;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error)]
pub enum CameraError {
    #[error("sensor resolution {width}x{height} needs at least 2 pixels in each dimension")]
    DegenerateResolution { width: u32, height: u32 },
    #[error("cannot orient the sensor: {0}")]
    DegenerateView(#[from] GeometryError),
}

/// The image plane: a parallelogram in world space sampled by a grid of pixels.
///
/// Pixel (0, 0) is at corner `a` of the border. Pixel x runs along `d - a` and reaches `d` at
/// `width - 1`; pixel y runs along `b - a` and reaches `b` at `height - 1`.
#[derive(Debug, Clone)]
pub struct Sensor {
    border: Parallelogram,
    // Sensor pixel resolution.
    width: u32,
    height: u32,
}

impl Sensor {
    pub fn new(border: Parallelogram, width: u32, height: u32) -> Result<Self, CameraError> {
        if width < 2 || height < 2 {
            return Err(CameraError::DegenerateResolution { width, height });
        }
        Ok(Self {
            border,
            width,
            height,
        })
    }

    /// Returns resolution (width x height) of the sensor.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bilinearly interpolates the world-space position of a pixel across the sensor.
    pub fn locate_pixel(&self, x: u32, y: u32) -> Point3 {
        let across = (self.border.d - self.border.a) / (self.width - 1) as f32;
        let down = (self.border.b - self.border.a) / (self.height - 1) as f32;
        self.border.a + across * x as f32 + down * y as f32
    }
}

/// A pinhole camera: primary rays start at `location` and pass through the sensor pixels.
#[derive(Debug, Clone)]
pub struct Camera {
    location: Point3,
    sensor: Sensor,
}

impl Camera {
    pub fn new(location: Point3, sensor: Sensor) -> Camera {
        Camera { location, sensor }
    }

    /// Builds a camera at `location` whose sensor is centered at `location + direction`,
    /// perpendicular to `direction` and `width` wide. The sensor rows are horizontal, i.e.,
    /// perpendicular to the world up-vector (z-axis), and the pixels are square.
    ///
    /// Fails if the resolution is below 2x2, or if `direction` is zero or vertical.
    pub fn looking(
        location: Point3, direction: Vec3, width: f32, resolution: (u32, u32),
    ) -> Result<Camera, CameraError> {
        let (px_width, px_height) = resolution;
        if px_width < 2 || px_height < 2 {
            return Err(CameraError::DegenerateResolution {
                width: px_width,
                height: px_height,
            });
        }
        let height = width / px_width as f32 * px_height as f32;
        let center = location + direction;
        let h_offset = direction.cross(Vec3::Z).hat()? * (width * 0.5);
        let v_offset = direction.cross(h_offset).hat()? * (height * 0.5);
        let border = Parallelogram::new(
            center - h_offset - v_offset,
            center - h_offset + v_offset,
            center + h_offset + v_offset,
        );
        Ok(Camera::new(location, Sensor::new(border, px_width, px_height)?))
    }

    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }

    /// Returns resolution (width x height) of the camera sensor.
    pub fn resolution(&self) -> (u32, u32) {
        self.sensor.resolution()
    }

    /// Makes the primary ray through the given pixel. The ray reaches the sensor at t = 1.
    /// Returns `None` if the pixel is out of the sensor.
    pub fn shoot_ray(&self, x: u32, y: u32) -> Option<Ray> {
        let (width, height) = self.resolution();
        if x >= width || y >= height {
            None
        } else {
            Some(Ray::between(self.location, self.sensor.locate_pixel(x, y)))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::hcm::{point3, vec3};

    fn square_sensor(width: u32, height: u32) -> Result<Sensor, CameraError> {
        let border = Parallelogram::new(
            point3(-1.0, -1.0, 0.0),
            point3(-1.0, 1.0, 0.0),
            point3(1.0, 1.0, 0.0),
        );
        Sensor::new(border, width, height)
    }

    #[test]
    fn test_locate_pixel_corners() {
        let sensor = square_sensor(5, 3).unwrap();
        assert_eq!(sensor.locate_pixel(0, 0), point3(-1.0, -1.0, 0.0));
        assert_eq!(sensor.locate_pixel(4, 0), point3(1.0, -1.0, 0.0));
        assert_eq!(sensor.locate_pixel(0, 2), point3(-1.0, 1.0, 0.0));
        assert_eq!(sensor.locate_pixel(4, 2), point3(1.0, 1.0, 0.0));
        assert_eq!(sensor.locate_pixel(2, 1), point3(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_single_pixel_dimensions_are_rejected() {
        for (w, h) in [(1, 5), (5, 1), (1, 1), (0, 4)].iter().copied() {
            match square_sensor(w, h) {
                Err(CameraError::DegenerateResolution { width, height }) => {
                    assert_eq!((width, height), (w, h))
                }
                other => panic!("{}x{} accepted: {:?}", w, h, other),
            }
            let camera = Camera::looking(Point3::ORIGIN, Vec3::X, 1.0, (w, h));
            assert!(matches!(
                camera,
                Err(CameraError::DegenerateResolution { .. })
            ));
        }
        assert!(square_sensor(2, 2).is_ok());
    }

    #[test]
    fn test_looking_builds_centered_sensor() {
        let location = point3(1.0, 2.0, 3.0);
        let camera = Camera::looking(location, vec3(0.0, 2.0, 0.0), 1.8, (9, 5)).unwrap();
        let sensor = camera.sensor();
        // Center pixel is on the view axis.
        math::assert_close!(sensor.locate_pixel(4, 2), point3(1.0, 4.0, 3.0));
        // x runs rightward (+x when looking at +y), y runs downward.
        math::assert_close!(sensor.locate_pixel(0, 2), point3(0.1, 4.0, 3.0));
        math::assert_close!(sensor.locate_pixel(8, 2), point3(1.9, 4.0, 3.0));
        math::assert_close!(sensor.locate_pixel(4, 0), point3(1.0, 4.0, 3.5));
        math::assert_close!(sensor.locate_pixel(4, 4), point3(1.0, 4.0, 2.5));

        let ray = camera.shoot_ray(4, 2).unwrap();
        assert_eq!(ray.origin, location);
        math::assert_close!(ray.position_at(1.0), point3(1.0, 4.0, 3.0));
        assert!(camera.shoot_ray(9, 0).is_none());
        assert!(camera.shoot_ray(0, 5).is_none());
    }

    #[test]
    fn test_vertical_view_is_rejected() {
        let camera = Camera::looking(Point3::ORIGIN, -Vec3::Z, 1.0, (4, 4));
        assert!(matches!(camera, Err(CameraError::DegenerateView(_))));
        let camera = Camera::looking(Point3::ORIGIN, Vec3::ZERO, 1.0, (4, 4));
        assert!(matches!(camera, Err(CameraError::DegenerateView(_))));
    }
}
