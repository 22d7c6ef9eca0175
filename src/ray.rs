use crate::algebra::Vec3;

/// Half-line `origin + t·direction`. Intersection tests expect a unit direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin   : Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
