// File: crates/wx-core/src/windbarb.rs
// Summary: Meteorological wind-barb glyphs (calm circle, pennants, barbs, half barbs).
//
// Glyphs are described in a local 64-unit frame: the staff runs from the arrow
// foot at y=+32 to the tip at y=-32, and symbols are stacked from the tip
// toward the anchor. The frame is rotated by the wind direction and scaled
// around the anchor when drawn.

use crate::canvas::PathCommand;
use crate::geometry::Point;
use crate::theme::Color;

/// Radius of the calm circle before scaling.
pub const CALM_RADIUS: f64 = 32.0;

const STAFF_TIP: f64 = -32.0;
const PENNANT_STEP: f64 = 12.0;
const BARB_STEP: f64 = 9.0;

/// Knots, rounded to the nearest whole knot.
pub fn mps_to_knots(mps: f64) -> i64 {
    (mps * 3600.0 / 1852.0).round() as i64
}

/// One symbol along the staff; `base_y` is where it attaches in the local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarbSegment {
    /// Filled triangle, 50 knots.
    Pennant { base_y: f64 },
    /// Full line, 10 knots.
    Barb { base_y: f64 },
    /// Half-length line, 5 knots.
    HalfBarb { base_y: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum WindSymbol {
    Calm,
    Staff(Vec<BarbSegment>),
}

/// A wind glyph positioned on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct WindGlyph {
    pub anchor: Point,
    /// Degrees clockwise; the staff points toward where the wind comes from.
    pub direction: f64,
    pub scale: f64,
    pub color: Color,
    pub symbol: WindSymbol,
}

/// Build the glyph for `mps` blowing from `direction`.
///
/// Knots are decomposed greedily, largest unit first: pennants while at least
/// 48 remain, barbs while at least 8 remain, half barbs while more than 2 remain.
pub fn wind_barb(mps: f64, direction: f64, anchor: Point, scale: f64, color: Color) -> WindGlyph {
    let mut knots = mps_to_knots(mps);
    let symbol = if knots <= 2 {
        WindSymbol::Calm
    } else {
        let mut segments = Vec::new();
        let mut base_y = STAFF_TIP;
        while knots >= 48 {
            segments.push(BarbSegment::Pennant { base_y });
            base_y += PENNANT_STEP;
            knots -= 50;
        }
        while knots >= 8 {
            segments.push(BarbSegment::Barb { base_y });
            base_y += BARB_STEP;
            knots -= 10;
        }
        while knots > 2 {
            segments.push(BarbSegment::HalfBarb { base_y });
            base_y += BARB_STEP;
            knots -= 5;
        }
        WindSymbol::Staff(segments)
    };
    WindGlyph { anchor, direction, scale, color, symbol }
}

impl WindGlyph {
    pub fn is_calm(&self) -> bool {
        matches!(self.symbol, WindSymbol::Calm)
    }

    /// Calm circle radius in canvas pixels, if this is a calm glyph.
    pub fn calm_radius(&self) -> Option<f64> {
        self.is_calm().then(|| CALM_RADIUS * self.scale)
    }

    pub fn segments(&self) -> &[BarbSegment] {
        match &self.symbol {
            WindSymbol::Calm => &[],
            WindSymbol::Staff(s) => s,
        }
    }

    pub fn pennants(&self) -> usize {
        self.segments().iter().filter(|s| matches!(s, BarbSegment::Pennant { .. })).count()
    }

    pub fn barbs(&self) -> usize {
        self.segments().iter().filter(|s| matches!(s, BarbSegment::Barb { .. })).count()
    }

    pub fn half_barbs(&self) -> usize {
        self.segments().iter().filter(|s| matches!(s, BarbSegment::HalfBarb { .. })).count()
    }

    /// Knots represented by the drawn symbols.
    pub fn drawn_knots(&self) -> u32 {
        (self.pennants() * 50 + self.barbs() * 10 + self.half_barbs() * 5) as u32
    }

    pub fn stroke_width(&self) -> f64 {
        if self.is_calm() { 2.0 } else { 3.0 }
    }

    /// Stroked outline in the local frame: arrow foot, staff and every symbol.
    /// Empty for calm glyphs.
    pub fn stroke_path(&self) -> Vec<PathCommand> {
        use PathCommand::{Close, LineTo, MoveTo};
        if self.is_calm() {
            return Vec::new();
        }
        let p = Point::new;
        let mut path = vec![
            MoveTo(p(-5.0, 27.0)),
            LineTo(p(0.0, 32.0)),
            LineTo(p(5.0, 27.0)),
            MoveTo(p(0.0, 32.0)),
            LineTo(p(0.0, STAFF_TIP)),
        ];
        for seg in self.segments() {
            match *seg {
                BarbSegment::Pennant { base_y: b } => {
                    path.extend([MoveTo(p(0.0, b)), LineTo(p(20.0, b + 5.0)), LineTo(p(0.0, b + 10.0)), Close]);
                }
                BarbSegment::Barb { base_y: b } => {
                    path.extend([MoveTo(p(0.0, b + 5.0)), LineTo(p(20.0, b))]);
                }
                BarbSegment::HalfBarb { base_y: b } => {
                    path.extend([MoveTo(p(0.0, b + 5.0)), LineTo(p(10.0, b + 2.0))]);
                }
            }
        }
        path
    }

    /// Filled area in the local frame; only pennants are filled.
    pub fn fill_path(&self) -> Vec<PathCommand> {
        use PathCommand::{Close, LineTo, MoveTo};
        let p = Point::new;
        self.segments()
            .iter()
            .filter_map(|seg| match *seg {
                BarbSegment::Pennant { base_y: b } => {
                    Some([MoveTo(p(0.0, b)), LineTo(p(20.0, b + 5.0)), LineTo(p(0.0, b + 10.0)), Close])
                }
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Map a local-frame point to canvas pixels: scale, then rotate, then translate.
    pub fn to_canvas(&self, local: Point) -> Point {
        let (sin, cos) = self.direction.to_radians().sin_cos();
        let (x, y) = (local.x * self.scale, local.y * self.scale);
        Point::new(self.anchor.x + x * cos - y * sin, self.anchor.y + x * sin + y * cos)
    }
}

/// Reference sheet of glyphs for 0..`max_knots` knots, twenty per row.
pub fn reference_sheet(max_knots: u32, scale: f64, color: &Color) -> Vec<(u32, Point, WindGlyph)> {
    (0..max_knots)
        .map(|kts| {
            let label = Point::new(f64::from(kts % 20) * 30.0 + 10.0, f64::from(kts / 20) * 80.0 + 10.0);
            let anchor = Point::new(label.x, label.y + 30.0);
            let glyph = wind_barb(f64::from(kts) * 1852.0 / 3600.0, 0.0, anchor, scale, color.clone());
            (kts, label, glyph)
        })
        .collect()
}
