// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the aspect-fit calculation for displaying a frame
//! in the available canvas space, and the conversions between screen
//! coordinates (relative to the displayed frame) and image pixel
//! coordinates.

/// Compute the display size that fits a frame into the available space
/// while preserving its aspect ratio.
pub fn fit_dimensions(img_width: u32, img_height: u32, avail_w: f32, avail_h: f32) -> (f32, f32) {
    let img_aspect = img_width as f32 / img_height as f32;
    let avail_aspect = avail_w / avail_h;

    if img_aspect > avail_aspect {
        // Frame is wider - fit to width
        (avail_w, avail_w / img_aspect)
    } else {
        // Frame is taller - fit to height
        (avail_h * img_aspect, avail_h)
    }
}

/// Convert a position relative to the displayed frame's top-left corner
/// into image pixel coordinates. Positions outside the frame map to
/// out-of-bounds pixels; the overlay renderer clips them.
pub fn to_pixel_coords(
    rel_x: f32,
    rel_y: f32,
    display_w: f32,
    display_h: f32,
    img_width: u32,
    img_height: u32,
) -> (i32, i32) {
    let px = (rel_x / display_w * img_width as f32).floor() as i32;
    let py = (rel_y / display_h * img_height as f32).floor() as i32;
    (px, py)
}

/// Convert image pixel coordinates into a position relative to the
/// displayed frame's top-left corner.
pub fn to_screen_coords(
    px: i32,
    py: i32,
    display_w: f32,
    display_h: f32,
    img_width: u32,
    img_height: u32,
) -> (f32, f32) {
    (
        px as f32 / img_width as f32 * display_w,
        py as f32 / img_height as f32 * display_h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_image_fits_to_width() {
        let (w, h) = fit_dimensions(1920, 1080, 800.0, 800.0);
        assert_eq!(w, 800.0);
        assert!((h - 450.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_tall_image_fits_to_height() {
        let (w, h) = fit_dimensions(1080, 1920, 800.0, 800.0);
        assert_eq!(h, 800.0);
        assert!((w - 450.0).abs() < 0.001);
    }

    #[test]
    fn test_pixel_screen_roundtrip() {
        let (img_w, img_h) = (640, 480);
        let (disp_w, disp_h) = (320.0, 240.0);

        let (px, py) = to_pixel_coords(160.0, 120.0, disp_w, disp_h, img_w, img_h);
        assert_eq!((px, py), (320, 240));

        let (sx, sy) = to_screen_coords(px, py, disp_w, disp_h, img_w, img_h);
        assert!((sx - 160.0).abs() < 0.001);
        assert!((sy - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_pixel_coords_unscaled_display() {
        // Display at native resolution: screen position equals pixel.
        let (px, py) = to_pixel_coords(10.0, 10.0, 64.0, 48.0, 64, 48);
        assert_eq!((px, py), (10, 10));
    }

    #[test]
    fn test_pixel_coords_outside_frame_go_negative() {
        let (px, py) = to_pixel_coords(-5.0, -5.0, 100.0, 100.0, 100, 100);
        assert_eq!((px, py), (-5, -5));
    }
}
