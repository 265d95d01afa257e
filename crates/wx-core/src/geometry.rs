// File: crates/wx-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and the derived canvas layout.

use crate::types::{Margins, HOURS};

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
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Canvas size plus the graph area carved out of it by the margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl CanvasGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as f64, height as f64);
        Self { width, height, margins: Margins::for_canvas(width, height) }
    }

    pub fn graph_width(&self) -> f64 { self.width - self.margins.hsum() }
    pub fn graph_height(&self) -> f64 { self.height - self.margins.vsum() }

    /// Width of one hourly slot; sky icons are sized to it.
    pub fn hour_width(&self) -> f64 { self.graph_width() / HOURS as f64 }

    pub fn bounds(&self) -> Rect {
        Rect::from_ltrb(0.0, 0.0, self.width, self.height)
    }

    /// Inner graph rectangle framed by the margins.
    pub fn graph_rect(&self) -> Rect {
        Rect::from_ltrb(
            self.margins.left,
            self.margins.top,
            self.width - self.margins.right,
            self.height - self.margins.bottom,
        )
    }
}
