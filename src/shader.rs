use crate::{
    algebra::{saturate, vec3_from_array, Vec3},
    object::Hit,
};
use serde::Deserialize;

/// Background gradient, blended on the ray's vertical component.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Sky {
    /// Color for a ray pointing straight along `+y`.
    #[serde(deserialize_with = "vec3_from_array")]
    pub up  : Vec3,
    /// Color for a ray pointing straight along `-y`.
    #[serde(deserialize_with = "vec3_from_array")]
    pub down: Vec3,
}

impl Default for Sky {
    fn default() -> Self {
        Self { up: Vec3(1.0, 1.0, 1.0), down: Vec3(0.4, 0.7, 1.0) }
    }
}

impl Sky {
    pub fn color(&self, direction: Vec3) -> Vec3 {
        let t = saturate(0.5 * (direction.1 + 1.0));
        self.up * t + self.down * (1.0 - t)
    }
}

/// What a hit contributes to the pixel. Misses always get the sky.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// The primitive's color, unmodified.
    #[default]
    Flat,
    /// Surface normal remapped from `[-1, 1]` to `[0, 1]` per channel.
    Normal,
}

/// No lighting: a hit is colored by `shading`, a miss by the sky gradient.
pub fn shade(hit: Option<&Hit>, direction: Vec3, sky: &Sky, shading: Shading) -> Vec3 {
    match (hit, shading) {
        (Some(h), Shading::Flat) => h.color,
        (Some(h), Shading::Normal) => (h.normal + Vec3(1.0, 1.0, 1.0)) * 0.5,
        (None, _) => sky.color(direction),
    }
}
