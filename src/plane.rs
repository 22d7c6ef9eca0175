use crate::{
    algebra::Vec3,
    object::{Hit, Intersect},
    ray::Ray,
};

/// Below this `dot(dir, normal)` the ray counts as parallel or back-facing.
pub const PLANE_EPSILON: f32 = 1e-5;

/// Infinite plane `dot(normal, p) + distance = 0`.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub normal  : Vec3,
    pub distance: f32,
    pub color   : Vec3,
}

impl Intersect for Plane {
    /// Single-sided: only rays travelling along `+normal` are accepted, and
    /// only when the plane lies ahead of the origin.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let denom = ray.direction.dot(self.normal);
        if denom <= PLANE_EPSILON {
            return None;
        }

        let distance = -(ray.origin.dot(self.normal) + self.distance) / denom;
        if distance < 0.0 {
            return None;
        }

        Some(Hit {
            position: ray.at(distance),
            normal: -self.normal,
            distance,
            color: self.color,
        })
    }
}
