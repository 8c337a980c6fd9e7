use math::hcm::{Point3, Vec3};
use std::fmt::{Display, Formatter, Result};

/// Contains geometric information on a ray-surface intersection:
///  - `pos`: position of intersection,
///  - `t`: t-value of the ray at the intersection,
///  - `normal`: normal vector of the surface, not normalized. Its orientation is shape-specific.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub pos: Point3,
    pub t: f32,
    pub normal: Vec3,
}

impl Hit {
    pub fn new(pos: Point3, t: f32, normal: Vec3) -> Hit {
        Hit { pos, t, normal }
    }
}

impl Display for Hit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "pos = {}, t = {:.3}, normal = {}",
            self.pos, self.t, self.normal
        )
    }
}
