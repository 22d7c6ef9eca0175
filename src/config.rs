//! Render settings and scene description.
//!
//! `RenderConfig::default()` is the built-in scene. A JSON file with the same
//! shape can replace it:
//!
//! ```json
//! {
//!   "width": 1024, "height": 768, "output": "render.png", "shading": "flat",
//!   "camera": { "position": [0, 0, -8], "near": 2 },
//!   "objects": [
//!     { "sphere": { "center": [0, 0, -4], "radius": 0.5, "rgb": [1, 0, 0] } },
//!     { "plane":  { "normal": [0, 1, 0], "distance": -0.5, "rgb": [0.5, 0.5, 0.5] } }
//!   ]
//! }
//! ```

use crate::{
    algebra::{vec3_from_array, Vec3},
    camera::Camera,
    object::Object,
    plane::Plane,
    renderer::ChannelPolicy,
    scene::{Scene, DEFAULT_MAX_DISTANCE},
    shader::{Shading, Sky},
    sphere::Sphere,
};
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SphereDesc {
    #[serde(deserialize_with = "vec3_from_array")]
    pub center: Vec3,
    pub radius: f32,
    #[serde(deserialize_with = "vec3_from_array")]
    pub rgb: Vec3,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PlaneDesc {
    /// Normalized on load.
    #[serde(deserialize_with = "vec3_from_array")]
    pub normal: Vec3,
    pub distance: f32,
    #[serde(deserialize_with = "vec3_from_array")]
    pub rgb: Vec3,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
pub enum ObjectDesc {
    Sphere { sphere: SphereDesc },
    Plane { plane: PlaneDesc },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width  : u32,
    pub height : u32,
    pub output : String,
    pub channel_policy: ChannelPolicy,
    pub shading: Shading,
    pub camera : Camera,
    pub sky    : Sky,
    pub max_distance: f32,
    pub objects: Vec<ObjectDesc>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            output: "render.png".to_string(),
            channel_policy: ChannelPolicy::default(),
            shading: Shading::default(),
            camera: Camera::default(),
            sky: Sky::default(),
            max_distance: DEFAULT_MAX_DISTANCE,
            objects: vec![
                ObjectDesc::Sphere {
                    sphere: SphereDesc {
                        center: Vec3(0.0, 0.0, -4.0),
                        radius: 0.5,
                        rgb: Vec3(1.0, 0.0, 0.0),
                    },
                },
                ObjectDesc::Plane {
                    plane: PlaneDesc {
                        normal: Vec3(0.0, 1.0, 0.0),
                        distance: -0.5,
                        rgb: Vec3(0.5, 0.5, 0.5),
                    },
                },
            ],
        }
    }
}

impl RenderConfig {
    pub fn from_json(data: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(data).context("invalid scene json")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0 && self.height > 0, "resolution must be non-zero, got {}x{}", self.width, self.height);
        ensure!(self.max_distance > 0.0, "max_distance must be positive, got {}", self.max_distance);
        for (i, o) in self.objects.iter().enumerate() {
            match o {
                ObjectDesc::Sphere { sphere } => {
                    ensure!(sphere.radius > 0.0, "object {i}: sphere radius must be positive, got {}", sphere.radius);
                }
                ObjectDesc::Plane { plane } => {
                    ensure!(plane.normal.magnitude() > 0.0, "object {i}: plane normal has zero length");
                }
            }
        }
        Ok(())
    }

    /// Build the scene in declaration order.
    pub fn scene(&self) -> Scene {
        let objects = self
            .objects
            .iter()
            .map(|o| match *o {
                ObjectDesc::Sphere { sphere } => Object::Sphere(Sphere {
                    center: sphere.center,
                    radius: sphere.radius,
                    color: sphere.rgb,
                }),
                ObjectDesc::Plane { plane } => Object::Plane(Plane {
                    normal: plane.normal.normalize(),
                    distance: plane.distance,
                    color: plane.rgb,
                }),
            })
            .collect();
        Scene::new(objects).with_max_distance(self.max_distance)
    }
}

pub fn load(path: impl AsRef<Path>) -> Result<RenderConfig> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    RenderConfig::from_json(&data).with_context(|| format!("failed to load {}", path.display()))
}
