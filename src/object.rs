use crate::{algebra::Vec3, plane::Plane, ray::Ray, sphere::Sphere};

/// Result of a successful intersection test.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub position: Vec3,
    /// Unit length, facing against the incoming ray.
    pub normal  : Vec3,
    /// Distance along the ray, never negative.
    pub distance: f32,
    pub color   : Vec3,
}

/// Anything a ray can be tested against.
pub trait Intersect {
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

#[derive(Clone, Debug)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
}

impl Intersect for Object {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Self::Sphere(s) => s.intersect(ray),
            Self::Plane(p) => p.intersect(ray),
        }
    }
}

impl From<Sphere> for Object {
    fn from(s: Sphere) -> Self { Self::Sphere(s) }
}

impl From<Plane> for Object {
    fn from(p: Plane) -> Self { Self::Plane(p) }
}
