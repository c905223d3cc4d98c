// File: crates/viz-core/src/types.rs
// Summary: Shared types and constants (dimensions, margins).

use serde::Deserialize;

/// Default surface width in pixels.
pub const WIDTH: f32 = 960.0;
/// Default surface height in pixels.
pub const HEIGHT: f32 = 540.0;

/// Extra margin reserved for an axis title, per side.
const AXIS_TITLE_PX: f32 = 28.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 {
        self.top + self.bottom
    }

    /// Grow the insets to make room for axis titles.
    pub fn with_axis_titles(mut self, x_title: bool, y_title: bool) -> Self {
        if x_title {
            self.bottom += AXIS_TITLE_PX;
        }
        if y_title {
            self.left += AXIS_TITLE_PX;
        }
        self
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56.0, 24.0, 24.0, 40.0)
    }
}

/// Current drawing dimensions, as reported by the host (resize observer or
/// fixed config). Zero or negative dimensions mean "not measured yet".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both sides known and positive; anything else renders nothing.
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
