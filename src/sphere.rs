//! src/sphere.rs
//! -------------
//! Sphere with constant radius and a flat color.

use crate::{
    algebra::Vec3,
    object::{Hit, Intersect},
    ray::Ray,
};

#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color : Vec3,
}

impl Intersect for Sphere {
    /// Geometric test: perpendicular distance from the center to the ray line
    /// decides hit or miss, then the half-chord gives the entry distance.
    ///
    /// From inside the sphere the exit point is returned. A sphere entirely
    /// behind the ray origin is a miss.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = self.center - ray.origin;
        // |dir| == 1, so |dir × oc| is the distance from the center to the line
        let d = ray.direction.cross(oc).magnitude();
        if d > self.radius {
            return None;
        }

        let t1 = ray.direction.dot(oc);
        let t2 = (self.radius * self.radius - d * d).sqrt();

        let distance = if t1 - t2 >= 0.0 {
            t1 - t2
        } else if t1 + t2 >= 0.0 {
            t1 + t2
        } else {
            return None;
        };

        let position = ray.at(distance);
        let outward = (position - self.center).normalize();
        let normal = if outward.dot(ray.direction) > 0.0 { -outward } else { outward };

        Some(Hit { position, normal, distance, color: self.color })
    }
}
