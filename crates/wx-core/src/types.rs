// File: crates/wx-core/src/types.rs
// Summary: Shared constants and margin layout for the forecast canvas.

/// Default canvas width in pixels (Inky Impression 5.7").
pub const WIDTH: u32 = 600;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 448;

/// Number of hourly slots shown on the chart.
pub const HOURS: usize = 12;

/// Screen margins around the graph area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    /// Margins derived from the canvas size using the fixed layout ratios.
    /// The top margin is tall enough to hold the header row.
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self::new(width / 15.0, width / 12.0, height / 4.5, height / 15.0)
    }

    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::for_canvas(WIDTH as f64, HEIGHT as f64)
    }
}
