use math::hcm::{Point3, Vec3};
use math::GeometryError;

/// Opening angles (in radians) of a spot light, with their cosines precomputed.
#[derive(Debug, Clone, Copy)]
pub struct Cone {
    pub min_angle: f32,
    pub max_angle: f32,
    pub min_cos: f32,
    pub max_cos: f32,
}

impl Cone {
    pub fn new(min_angle: f32, max_angle: f32) -> Self {
        Self {
            min_angle,
            max_angle,
            min_cos: min_angle.cos(),
            max_cos: max_angle.cos(),
        }
    }
}

// Various kinds of lights.

/// A light located at a single point, emitting equally in all directions.
///
/// `Spot` carries a cone but shades exactly like `Point`: restricting the emission to the cone is
/// not implemented.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    Point {
        position: Point3,
        intensity: f32,
    },
    Spot {
        position: Point3,
        intensity: f32,
        cone: Cone,
    },
}

impl Light {
    /// Creates a point light with the given position and intensity of the light.
    pub fn point(position: Point3, intensity: f32) -> Self {
        Self::Point {
            position,
            intensity,
        }
    }

    /// Creates a spot light whose cone has the same inner and outer angle.
    pub fn spot(position: Point3, intensity: f32, angle: f32) -> Self {
        Self::spot_range(position, intensity, angle, angle)
    }

    pub fn spot_range(position: Point3, intensity: f32, min_angle: f32, max_angle: f32) -> Self {
        Self::Spot {
            position,
            intensity,
            cone: Cone::new(min_angle, max_angle),
        }
    }

    pub fn position(&self) -> Point3 {
        match self {
            Self::Point { position, .. } | Self::Spot { position, .. } => *position,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Self::Point { intensity, .. } | Self::Spot { intensity, .. } => *intensity,
        }
    }

    /// Returns the same light with its intensity multiplied by `k`.
    pub fn scaled(self, k: f32) -> Self {
        match self {
            Self::Point {
                position,
                intensity,
            } => Self::point(position, intensity * k),
            Self::Spot {
                position,
                intensity,
                cone,
            } => Self::Spot {
                position,
                intensity: intensity * k,
                cone,
            },
        }
    }

    /// Computes the intensity the light casts onto a surface point `p` with the given `normal`,
    /// regardless of occlusion:
    ///
    ///   |cos(normal, light - p)| * intensity / |light - p|
    ///
    /// Neither vector needs to be normalized. Fails if either is zero, i.e., the normal is
    /// degenerate or `p` is at the light position.
    pub fn intensity_at(&self, normal: Vec3, p: Point3) -> Result<f32, GeometryError> {
        let to_light = self.position() - p;
        let cos = normal.hat()?.dot(to_light.hat()?);
        Ok(cos.abs() * self.intensity() / to_light.norm())
    }
}
