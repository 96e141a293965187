// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading (still images).
//!
//! This module handles loading image files and converting them to RGBA
//! pixel buffers suitable for display in egui. A decode failure here is
//! the resolver's cue to try the file as a video stream instead.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded RGBA frame ready for display or overlay baking.
///
/// `pixels` holds `width * height * 4` bytes in row-major RGBA order.
/// Committed rectangles are baked directly into this buffer.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load and decode a still image into an RGBA frame.
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to probe format of {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    let rgba = img.to_rgba8();
    Ok(Frame {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_image_decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let frame = load_image(&path).unwrap();
        assert_eq!(frame.width, 4);
        assert_eq!(frame.height, 3);
        assert_eq!(frame.pixels.len(), 4 * 3 * 4);
        assert_eq!(&frame.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_load_image_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not pixels").unwrap();

        assert!(load_image(&path).is_err());
    }

    #[test]
    fn test_load_image_rejects_missing_file() {
        assert!(load_image(Path::new("/no/such/file.png")).is_err());
    }
}
