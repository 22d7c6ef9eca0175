use crate::{
    algebra::{saturate, Vec3},
    config::RenderConfig,
    object::Intersect,
    scene::Scene,
    shader::shade,
};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Deserialize;

/// Bytes per pixel in the output buffer (R, G, B).
pub const CHANNELS: usize = 3;

/// How a float channel outside `[0, 1]` becomes a byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelPolicy {
    /// Saturate first, then scale and truncate.
    #[default]
    Clamp,
    /// Scale and truncate without clamping; out-of-range values wrap modulo 256.
    Wrap,
}

impl ChannelPolicy {
    pub fn to_byte(self, c: f32) -> u8 {
        match self {
            Self::Clamp => (saturate(c) * 255.0) as u8,
            // NaN -> 0 through the i64 cast
            Self::Wrap => (c * 255.0) as i64 as u8,
        }
    }

    pub fn to_rgb(self, c: Vec3) -> [u8; 3] {
        [self.to_byte(c.0), self.to_byte(c.1), self.to_byte(c.2)]
    }
}

/// Color of a single pixel, already packed to bytes.
pub fn pixel_color(x: u32, y: u32, config: &RenderConfig, scene: &Scene) -> [u8; 3] {
    let ray = config.camera.primary_ray(x, y, config.width, config.height);
    let hit = scene.intersect(&ray);
    config.channel_policy.to_rgb(shade(hit.as_ref(), ray.direction, &config.sky, config.shading))
}

/// Row-major, top-to-bottom RGB buffer with stride `width * CHANNELS`.
///
/// Rows are filled in parallel into disjoint slices; the result does not
/// depend on scheduling. A zero-sized image yields an empty buffer.
pub fn render(config: &RenderConfig, scene: &Scene, bar: Option<&ProgressBar>) -> Vec<u8> {
    let stride = config.width as usize * CHANNELS;
    if stride == 0 || config.height == 0 {
        return Vec::new();
    }
    let mut pixels = vec![0u8; stride * config.height as usize];

    pixels
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                px.copy_from_slice(&pixel_color(x as u32, y as u32, config, scene));
            }
            if let Some(b) = bar {
                b.inc(1);
            }
        });

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::Shading;

    fn at(pixels: &[u8], config: &RenderConfig, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * config.width as usize + x as usize) * CHANNELS;
        [pixels[i], pixels[i + 1], pixels[i + 2]]
    }

    #[test]
    fn default_scene_center_red_top_sky_and_repeatable() {
        let config = RenderConfig::default();
        let scene = config.scene();
        let pixels = render(&config, &scene, None);
        assert_eq!(pixels.len(), 1024 * 768 * 3);

        assert_eq!(at(&pixels, &config, 512, 384), [255, 0, 0]);

        // recompute the top-row ray from the mapping formula by hand
        let aspect = 1024.0_f32 / 768.0;
        let px = aspect * (512.0 / 1024.0) - (aspect - 1.0) * 0.5 - 0.5;
        let pixel = Vec3(px, -0.5, -6.0);
        let dir = (pixel - Vec3(0.0, 0.0, -8.0)).normalize();
        let t = saturate(0.5 * (dir.1 + 1.0));
        let sky = Vec3(1.0, 1.0, 1.0) * t + Vec3(0.4, 0.7, 1.0) * (1.0 - t);
        let expected = [(sky.0 * 255.0) as u8, (sky.1 * 255.0) as u8, (sky.2 * 255.0) as u8];
        assert_eq!(at(&pixels, &config, 512, 0), expected);

        assert_eq!(render(&config, &scene, None), pixels);
    }

    #[test]
    fn bottom_rows_see_the_ground() {
        let config = RenderConfig::default();
        let scene = config.scene();
        assert_eq!(pixel_color(10, 767, &config, &scene), [127, 127, 127]);
    }

    #[test]
    fn zero_sized_image_renders_empty() {
        for (width, height) in [(0, 768), (1024, 0), (0, 0)] {
            let config = RenderConfig { width, height, ..RenderConfig::default() };
            let scene = config.scene();
            assert!(render(&config, &scene, None).is_empty());
        }
    }

    #[test]
    fn normal_shading_colors_sphere_front() {
        let config = RenderConfig { shading: Shading::Normal, ..RenderConfig::default() };
        let scene = config.scene();
        // center ray meets the sphere head-on, normal ≈ (0, 0, -1)
        assert_eq!(pixel_color(512, 384, &config, &scene), [127, 127, 0]);
    }

    #[test]
    fn parallel_render_matches_sequential_pixels() {
        let config = RenderConfig { width: 40, height: 30, ..RenderConfig::default() };
        let scene = config.scene();
        let pixels = render(&config, &scene, None);
        for y in 0..config.height {
            for x in 0..config.width {
                assert_eq!(at(&pixels, &config, x, y), pixel_color(x, y, &config, &scene));
            }
        }
    }

    #[test]
    fn channel_policies_differ_out_of_range() {
        assert_eq!(ChannelPolicy::Clamp.to_byte(1.5), 255);
        assert_eq!(ChannelPolicy::Wrap.to_byte(1.5), 126); // 382 mod 256
        assert_eq!(ChannelPolicy::Clamp.to_byte(-0.5), 0);
        assert_eq!(ChannelPolicy::Wrap.to_byte(-0.5), 129); // -127 mod 256
        assert_eq!(ChannelPolicy::Clamp.to_byte(f32::NAN), 0);
        assert_eq!(ChannelPolicy::Wrap.to_byte(f32::NAN), 0);
        assert_eq!(ChannelPolicy::Wrap.to_byte(0.5), ChannelPolicy::Clamp.to_byte(0.5));
    }
}
