//! Persisting the finished RGB buffer.

use crate::renderer::CHANNELS;
use anyhow::{ensure, Context, Result};
use image::RgbImage;
use log::debug;
use std::{fs, path::Path};

/// Receives a complete row-major RGB8 buffer (stride `width * 3`, no padding).
pub trait ImageSink {
    fn write_image(&self, path: &Path, width: u32, height: u32, pixels: &[u8]) -> Result<()>;
}

/// Writes the buffer with the `image` crate; the format follows the extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSink;

impl ImageSink for FileSink {
    fn write_image(&self, path: &Path, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
        let expected = width as usize * height as usize * CHANNELS;
        ensure!(
            pixels.len() == expected,
            "buffer holds {} bytes, {width}x{height} RGB needs {expected}",
            pixels.len()
        );

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let img = RgbImage::from_raw(width, height, pixels.to_vec())
            .context("pixel buffer does not match image dimensions")?;
        img.save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("wrote {}x{} image to {}", width, height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("pinhole-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn png_round_trips_pixels() {
        let path = scratch("nested/round_trip.png");
        let pixels: Vec<u8> = (0..4 * 2 * 3).map(|i| (i * 10) as u8).collect();
        FileSink.write_image(&path, 4, 2, &pixels).unwrap();

        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (4, 2));
        assert_eq!(back.into_raw(), pixels);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let path = scratch("short.png");
        assert!(FileSink.write_image(&path, 4, 4, &[0u8; 10]).is_err());
        assert!(!path.exists());
    }
}
