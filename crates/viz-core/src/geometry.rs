// File: crates/viz-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::{Dimensions, Insets};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF32 {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF32 {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

/// Margin-adjusted drawing area, or `None` when the dimensions are not
/// drawable or the insets consume the whole surface.
pub fn plot_rect(dims: Dimensions, insets: &Insets) -> Option<RectF32> {
    if !dims.is_drawable() {
        return None;
    }
    if insets.hsum() >= dims.width || insets.vsum() >= dims.height {
        return None;
    }
    Some(RectF32::from_ltrb(
        insets.left,
        insets.top,
        dims.width - insets.right,
        dims.height - insets.bottom,
    ))
}

#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
