// File: crates/wx-core/src/scale.rs
// Summary: Shared temperature/precipitation axis solving and the hour/value to pixel transforms.

use crate::forecast::ForecastPoint;
use crate::geometry::{CanvasGeometry, Point};
use crate::types::HOURS;

/// Candidate precipitation multipliers, coarsest readable unit first.
pub const RAIN_MULTIPLIERS: [f64; 9] = [0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0];

/// Temperature bounds and the precipitation multiplier for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min_temp: i32,
    pub max_temp: i32,
    /// Largest precipitation in the window, rounded up to whole mm.
    pub max_rain: f64,
    /// Converts mm to degrees on the shared vertical axis.
    pub multiplier: f64,
}

impl Scale {
    /// Solve bounds and multiplier over the given points.
    ///
    /// An empty input yields a zero range with an unused multiplier.
    pub fn solve<'a>(points: impl IntoIterator<Item = &'a ForecastPoint>) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut max_rain: f64 = 0.0;
        for p in points {
            let t = p.temperature();
            lo = lo.min(t.floor());
            hi = hi.max(t.ceil());
            max_rain = max_rain.max(p.next_hour.precipitation_upper_bound().ceil());
        }
        let (min_temp, max_temp) = if lo.is_finite() && hi.is_finite() {
            (lo as i32, hi as i32)
        } else {
            (0, 0)
        };
        let multiplier = solve_multiplier(max_rain, (max_temp - min_temp) as f64);
        Self { min_temp, max_temp, max_rain, multiplier }
    }

    pub fn temp_range(&self) -> i32 {
        self.max_temp - self.min_temp
    }

    pub fn has_rain(&self) -> bool {
        self.max_rain > 0.0
    }
}

/// Largest multiplier whose scaled rain still fits within `temp_range`.
/// Falls back to 1 when even the smallest candidate overshoots.
pub fn solve_multiplier(max_rain: f64, temp_range: f64) -> f64 {
    let mut chosen = 1.0;
    for m in RAIN_MULTIPLIERS {
        if max_rain * m > temp_range {
            break;
        }
        chosen = m;
    }
    chosen
}

/// Pixel transforms for one canvas and one solved scale.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    geometry: CanvasGeometry,
    scale: Scale,
}

impl CoordinateMapper {
    pub fn new(geometry: CanvasGeometry, scale: Scale) -> Self {
        Self { geometry, scale }
    }

    pub fn geometry(&self) -> &CanvasGeometry { &self.geometry }
    pub fn scale(&self) -> &Scale { &self.scale }

    /// Hour index 0 sits on the left inner edge, index 11 on the right one.
    #[inline]
    pub fn hour_to_x(&self, h: f64) -> f64 {
        h * self.geometry.graph_width() / (HOURS - 1) as f64 + self.geometry.margins.left
    }

    /// Inverted linear map: warmer is higher on the canvas.
    /// A zero range collapses every temperature onto the bottom edge.
    #[inline]
    pub fn temp_to_y(&self, t: f64) -> f64 {
        let baseline = self.geometry.height - self.geometry.margins.bottom;
        let range = self.scale.temp_range();
        if range == 0 {
            return baseline;
        }
        baseline - self.geometry.graph_height() / range as f64 * (t - self.scale.min_temp as f64)
    }

    #[inline]
    pub fn precip_to_y(&self, mm: f64) -> f64 {
        self.temp_to_y(mm * self.scale.multiplier + self.scale.min_temp as f64)
    }

    pub fn temp_point(&self, h: usize, t: f64) -> Point {
        Point::new(self.hour_to_x(h as f64), self.temp_to_y(t))
    }

    pub fn precip_point(&self, h: usize, mm: f64) -> Point {
        Point::new(self.hour_to_x(h as f64), self.precip_to_y(mm))
    }
}
