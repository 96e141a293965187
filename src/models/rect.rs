// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Rectangle data structure.
//!
//! This module defines the rectangle used for drag selections and
//! baked overlays, in image pixel coordinates.

/// An axis-aligned rectangle in image pixel coordinates.
///
/// While a drag is in progress `width` and `height` may be negative
/// (the pointer is left of or above the drag origin); `normalized`
/// is applied when the drag is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Return an equivalent rectangle with non-negative extents,
    /// shifting the origin where an extent was negative.
    pub fn normalized(self) -> Self {
        let mut rect = self;
        if rect.width < 0 {
            rect.x += rect.width;
            rect.width = -rect.width;
        }
        if rect.height < 0 {
            rect.y += rect.height;
            rect.height = -rect.height;
        }
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_is_identity_for_positive_extents() {
        let rect = Rect::new(10, 10, 40, 30);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn test_normalized_flips_negative_width() {
        let rect = Rect::new(50, 10, -40, 30).normalized();
        assert_eq!(rect, Rect::new(10, 10, 40, 30));
    }

    #[test]
    fn test_normalized_flips_negative_height() {
        let rect = Rect::new(10, 40, 40, -30).normalized();
        assert_eq!(rect, Rect::new(10, 10, 40, 30));
    }

    #[test]
    fn test_normalized_flips_both_extents() {
        let rect = Rect::new(50, 40, -40, -30).normalized();
        assert_eq!(rect, Rect::new(10, 10, 40, 30));
    }

    #[test]
    fn test_normalized_keeps_zero_extents() {
        let rect = Rect::new(5, 5, 0, 0).normalized();
        assert_eq!(rect, Rect::new(5, 5, 0, 0));
    }
}
