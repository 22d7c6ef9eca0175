use crate::{algebra::Vec3, ray::Ray};
use serde::Deserialize;

/// Pinhole camera looking down `+z`, with the image plane `near` units ahead.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Camera {
    #[serde(deserialize_with = "crate::algebra::vec3_from_array")]
    pub position: Vec3,
    pub near    : f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self { position: Vec3(0.0, 0.0, -8.0), near: 2.0 }
    }
}

impl Camera {
    /// Point on the near plane for pixel `(x, y)`. The plane spans one unit
    /// vertically and `width/height` units horizontally, centered on the axis.
    pub fn pixel_position(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let aspect = width as f32 / height as f32;
        Vec3(
            aspect * (x as f32 / width as f32) - (aspect - 1.0) * 0.5 - 0.5,
            y as f32 / height as f32 - 0.5,
            self.position.2 + self.near,
        )
    }

    /// Single deterministic primary ray, starting on the near plane.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let pixel = self.pixel_position(x, y, width, height);
        Ray::new(pixel, (pixel - self.position).normalize())
    }
}
