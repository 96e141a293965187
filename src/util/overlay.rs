// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Rectangle overlay rendering.
//!
//! Bakes an unfilled rectangle outline into an RGBA pixel buffer. Used
//! when a drag is committed so the rectangle persists on the frame after
//! the gesture ends; the in-progress rectangle is stroked by the egui
//! painter instead and never touches the pixels.

use crate::models::rect::Rect;

/// Outline stroke width in pixels.
const STROKE: i32 = 2;

/// Default overlay color (opaque green).
pub const OVERLAY_COLOR: [u8; 4] = [0, 255, 0, 255];

/// Draw an unfilled rectangle outline into an RGBA buffer.
///
/// The rectangle is interpreted in pixel coordinates and clipped to the
/// buffer bounds; parts outside the frame are silently dropped. Expects a
/// normalized rectangle (non-negative extents).
pub fn draw_rect(pixels: &mut [u8], width: u32, height: u32, rect: &Rect, color: [u8; 4]) {
    debug_assert_eq!(pixels.len(), (width * height * 4) as usize);

    let x1 = rect.x + rect.width;
    let y1 = rect.y + rect.height;

    // Top and bottom edges.
    fill_span(pixels, width, height, rect.x, x1, rect.y, rect.y + STROKE, color);
    fill_span(pixels, width, height, rect.x, x1, y1 - STROKE + 1, y1 + 1, color);
    // Left and right edges.
    fill_span(pixels, width, height, rect.x, rect.x + STROKE, rect.y, y1 + 1, color);
    fill_span(pixels, width, height, x1 - STROKE + 1, x1 + 1, rect.y, y1 + 1, color);
}

/// Fill the half-open pixel region [x0, x1) x [y0, y1), clipped to bounds.
fn fill_span(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    x0: i32,
    x1: i32,
    y0: i32,
    y1: i32,
    color: [u8; 4],
) {
    let x0 = x0.clamp(0, width as i32) as u32;
    let x1 = x1.clamp(0, width as i32) as u32;
    let y0 = y0.clamp(0, height as i32) as u32;
    let y1 = y1.clamp(0, height as i32) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            let i = ((y * width + x) * 4) as usize;
            pixels[i..i + 4].copy_from_slice(&color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 20;
    const H: u32 = 15;
    const RED: [u8; 4] = [255, 0, 0, 255];

    fn blank() -> Vec<u8> {
        vec![0; (W * H * 4) as usize]
    }

    fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 4] {
        let i = ((y * W + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn test_outline_touches_all_four_edges() {
        let mut pixels = blank();
        let rect = Rect::new(2, 3, 10, 8);
        draw_rect(&mut pixels, W, H, &rect, RED);

        // Corners of the outline are set.
        assert_eq!(pixel(&pixels, 2, 3), RED);
        assert_eq!(pixel(&pixels, 12, 3), RED);
        assert_eq!(pixel(&pixels, 2, 11), RED);
        assert_eq!(pixel(&pixels, 12, 11), RED);
        // Interior stays untouched.
        assert_eq!(pixel(&pixels, 7, 7), [0, 0, 0, 0]);
        // Outside the rectangle stays untouched.
        assert_eq!(pixel(&pixels, 0, 0), [0, 0, 0, 0]);
        assert_eq!(pixel(&pixels, 15, 13), [0, 0, 0, 0]);
    }

    #[test]
    fn test_rect_partially_outside_is_clipped() {
        let mut pixels = blank();
        // Extends past the right and bottom edges.
        let rect = Rect::new(15, 10, 30, 30);
        draw_rect(&mut pixels, W, H, &rect, RED);

        assert_eq!(pixel(&pixels, 15, 10), RED);
        assert_eq!(pixel(&pixels, 19, 10), RED);
        assert_eq!(pixel(&pixels, 15, 14), RED);
    }

    #[test]
    fn test_rect_fully_outside_draws_nothing() {
        let mut pixels = blank();
        let rect = Rect::new(100, 100, 10, 10);
        draw_rect(&mut pixels, W, H, &rect, RED);
        assert_eq!(pixels, blank());
    }

    #[test]
    fn test_zero_size_rect_draws_a_dot() {
        let mut pixels = blank();
        let rect = Rect::new(5, 5, 0, 0);
        draw_rect(&mut pixels, W, H, &rect, RED);
        assert_eq!(pixel(&pixels, 5, 5), RED);
    }
}
