use std::fmt::{Display, Formatter, Result};

use math::hcm;

/// Represents a ray (a half line):
///
///   origin + t * direction
///
/// where t is positive. The direction doesn't need to be unit-length; callers usually pass
/// `target - origin`, for which t = 1 is the target.
///
/// The extent of the ray is `(t_min, t_max)`, by default `(f32::EPSILON, inf)`. Shapes only
/// report hits whose t is strictly inside the extent. Secondary rays that start on a surface use
/// a larger `t_min` so that the surface doesn't intersect itself.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
    pub t_min: f32,
    pub t_max: f32,
}

impl Ray {
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray {
            origin,
            dir,
            t_min: f32::EPSILON,
            t_max: f32::INFINITY,
        }
    }

    /// Makes a ray from `origin` through `target`, where t = 1 is at `target`.
    pub fn between(origin: hcm::Point3, target: hcm::Point3) -> Self {
        Self::new(origin, target - origin)
    }

    pub fn with_bias(self, t_min: f32) -> Self {
        Ray { t_min, ..self }
    }

    /// Returns `None` if the given `t` is outside the ray's extent (`r.t_min`, `r.t_max`) or NaN.
    /// `Some(t)` otherwise.
    pub fn truncated_t(&self, t: f32) -> Option<f32> {
        if t > self.t_min && t < self.t_max {
            Some(t)
        } else {
            None
        }
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + t * self.dir
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}

#[cfg(test)]
mod test {
    use super::Ray;
    use math::hcm::{point3, vec3};

    #[test]
    fn test_truncated_t() {
        let r = Ray::new(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 2.0));
        assert_eq!(r.truncated_t(0.5), Some(0.5));
        assert_eq!(r.truncated_t(0.0), None);
        assert_eq!(r.truncated_t(-1.0), None);
        assert_eq!(r.truncated_t(f32::NAN), None);

        let r = r.with_bias(1e-3);
        assert_eq!(r.truncated_t(1e-4), None);
        assert_eq!(r.truncated_t(2e-3), Some(2e-3));
        assert_eq!(r.truncated_t(f32::INFINITY), None);
    }

    #[test]
    fn test_between() {
        let r = Ray::between(point3(1.0, 1.0, 1.0), point3(3.0, 1.0, -1.0));
        assert_eq!(r.position_at(1.0), point3(3.0, 1.0, -1.0));
        assert_eq!(r.position_at(0.5), point3(2.0, 1.0, 0.0));
    }
}
