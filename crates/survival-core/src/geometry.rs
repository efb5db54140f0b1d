// File: crates/survival-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Plot area left after removing `insets` from a `width`×`height` canvas.
    /// Collapses to zero size rather than going negative.
    pub fn plot_area(width: u32, height: u32, insets: &Insets) -> Self {
        let w = width.saturating_sub(insets.hsum()) as f64;
        let h = height.saturating_sub(insets.vsum()) as f64;
        Self::from_ltwh(insets.left as f64, insets.top as f64, w, h)
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// A point in plot-local pixels (origin at the plot area's top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
