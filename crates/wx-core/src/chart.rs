// File: crates/wx-core/src/chart.rs
// Summary: Chart renderer composing the forecast window into a layered vector canvas.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::axis::{hour_ticks, precipitation_ticks, temperature_ticks, LabelZone};
use crate::canvas::{Canvas, CanvasBuilder, Fill, Layer, PathCommand, Primitive, Stroke};
use crate::forecast::ForecastPoint;
use crate::geometry::{CanvasGeometry, Point, Rect};
use crate::scale::{CoordinateMapper, Scale};
use crate::theme::Palette;
use crate::timeline::Window;
use crate::types::{HEIGHT, HOURS, WIDTH};
use crate::windbarb::wind_barb;

const WIND_ROW_SCALE: f64 = 0.4;
const HEADER_WIND_SCALE: f64 = 0.8;
const BAND_OPACITY: f64 = 0.5;

pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub place: String,
    pub palette: Palette,
    pub label_zone: LabelZone,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            place: String::new(),
            palette: Palette::default(),
            label_zone: LabelZone::default(),
        }
    }
}

pub struct ChartRenderer {
    opts: RenderOptions,
    geometry: CanvasGeometry,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        let geometry = CanvasGeometry::new(opts.width, opts.height);
        Self { opts, geometry }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    /// Coordinate mapper for the given points on this renderer's canvas.
    pub fn mapper<'a>(&self, points: impl IntoIterator<Item = &'a ForecastPoint>) -> CoordinateMapper {
        CoordinateMapper::new(self.geometry, Scale::solve(points))
    }

    /// Render one frame. Layers are emitted in [`Layer`] order; an empty window
    /// produces background, grid skeleton and header only. `now` anchors the
    /// hour labels when there is no upcoming point.
    pub fn render(&self, window: &Window<'_>, now: DateTime<Utc>) -> Canvas {
        let points: Vec<&ForecastPoint> = window.points().take(HOURS).collect();
        let map = self.mapper(points.iter().copied());
        trace!(points = points.len(), scale = ?map.scale(), "rendering forecast chart");

        let mut b = CanvasBuilder::new(self.geometry.width, self.geometry.height);
        self.draw_background(&mut b);
        self.draw_precipitation(&mut b, &map, &points);
        self.draw_temperature(&mut b, &map, &points);
        let anchor = points.first().map_or(now, |p| p.timestamp);
        self.draw_grid(&mut b, &map, anchor);
        self.draw_sky_icons(&mut b, &map, &points);
        self.draw_wind(&mut b, &map, &points);
        self.draw_header(&mut b, window.current());
        b.finish()
    }

    fn draw_background(&self, b: &mut CanvasBuilder) {
        b.begin(Layer::Background).push(Primitive::Rect {
            rect: self.geometry.bounds(),
            fill: Some(Fill::solid(&self.opts.palette.background)),
            stroke: None,
        });
    }

    fn draw_precipitation(&self, b: &mut CanvasBuilder, map: &CoordinateMapper, points: &[&ForecastPoint]) {
        let color = &self.opts.palette.precipitation;
        b.begin(Layer::Precipitation);
        for (h, p) in points.iter().enumerate() {
            let rain = &p.next_hour;
            let x = map.hour_to_x(h as f64);

            if h > 0 {
                let prev = &points[h - 1].next_hour;
                let px = map.hour_to_x((h - 1) as f64);
                if prev.precipitation_upper_bound() > 0.0 || rain.precipitation_upper_bound() > 0.0 {
                    b.push(Primitive::Polygon {
                        points: vec![
                            Point::new(px, map.precip_to_y(prev.precipitation_amount)),
                            Point::new(px, map.precip_to_y(prev.precipitation_amount_max)),
                            Point::new(x, map.precip_to_y(rain.precipitation_amount_max)),
                            Point::new(x, map.precip_to_y(rain.precipitation_amount)),
                        ],
                        fill: Fill::translucent(color, BAND_OPACITY),
                        stroke: Some(Stroke::new(color, 1.0)),
                    });
                }
                if prev.precipitation_amount_min > 0.0 || rain.precipitation_amount_min > 0.0 {
                    let y0 = map.precip_to_y(0.0);
                    b.push(Primitive::Polygon {
                        points: vec![
                            Point::new(px, y0),
                            Point::new(px, map.precip_to_y(prev.precipitation_amount_min)),
                            Point::new(x, map.precip_to_y(rain.precipitation_amount_min)),
                            Point::new(x, y0),
                        ],
                        fill: Fill::solid(color),
                        stroke: Some(Stroke::new(color, 1.0)),
                    });
                }
            }

            if rain.precipitation_upper_bound() > 0.0 {
                b.push(Primitive::Path {
                    commands: error_bar(
                        x,
                        map.precip_to_y(rain.precipitation_amount_max),
                        map.precip_to_y(rain.precipitation_amount),
                        map.precip_to_y(rain.precipitation_amount_min),
                    ),
                    stroke: Stroke::new(color, 3.0),
                });
            }
        }
    }

    fn draw_temperature(&self, b: &mut CanvasBuilder, map: &CoordinateMapper, points: &[&ForecastPoint]) {
        b.begin(Layer::Temperature);
        if points.len() < 2 {
            return;
        }
        b.push(Primitive::Polyline {
            points: points.iter().enumerate().map(|(h, p)| map.temp_point(h, p.temperature())).collect(),
            stroke: Stroke::new(&self.opts.palette.temperature, 4.0),
        });
    }

    fn draw_grid(&self, b: &mut CanvasBuilder, map: &CoordinateMapper, anchor: DateTime<Utc>) {
        let palette = &self.opts.palette;
        let frame = self.geometry.graph_rect();
        let grid = Stroke::new(&palette.grid, 1.0);

        b.begin(Layer::Grid).push(Primitive::Rect { rect: frame, fill: None, stroke: Some(grid.clone()) });

        for tick in hour_ticks(anchor, self.opts.label_zone) {
            let x = map.hour_to_x(tick.index as f64);
            b.text(Point::new(x - 10.0, frame.top - 5.0), tick.label, &palette.hour_label, None);
            if tick.index > 0 && tick.index < HOURS - 1 {
                b.line(Point::new(x, frame.top), Point::new(x, frame.bottom), grid.clone());
            }
        }

        for t in temperature_ticks(map.scale()) {
            let y = map.temp_to_y(t as f64);
            b.line(Point::new(frame.left, y), Point::new(frame.right, y), grid.clone());
            b.text(Point::new(2.0, y), format!("{t}°"), &palette.temperature, None);
        }

        for mm in precipitation_ticks(map.scale()) {
            b.text(Point::new(frame.right + 3.0, map.precip_to_y(mm)), format!("{mm}mm"), &palette.precipitation, None);
        }
    }

    fn draw_sky_icons(&self, b: &mut CanvasBuilder, map: &CoordinateMapper, points: &[&ForecastPoint]) {
        let slot = self.geometry.hour_width();
        let mid = self.geometry.height / 2.0;
        b.begin(Layer::SkyIcons);
        for (h, p) in points.iter().enumerate() {
            let at = map.temp_point(h, p.temperature());
            // Keep the icon off the curve: above it in the lower half, below it in the upper half.
            let top = if at.y > mid { at.y - 1.5 * slot } else { at.y + slot };
            b.push(Primitive::Image {
                symbol_code: p.symbol_code().to_string(),
                rect: Rect::from_ltwh(at.x - slot / 2.0, top, slot, slot),
            });
        }
    }

    fn draw_wind(&self, b: &mut CanvasBuilder, map: &CoordinateMapper, points: &[&ForecastPoint]) {
        let row = self.geometry.height - self.geometry.margins.bottom + 14.0;
        b.begin(Layer::Wind);
        for (h, p) in points.iter().enumerate() {
            b.push(Primitive::Wind(wind_barb(
                p.details.gust_speed(),
                p.details.wind_from_direction,
                Point::new(map.hour_to_x(h as f64) - 2.0, row),
                WIND_ROW_SCALE,
                self.opts.palette.wind.clone(),
            )));
        }
    }

    fn draw_header(&self, b: &mut CanvasBuilder, current: Option<&ForecastPoint>) {
        let palette = &self.opts.palette;
        b.begin(Layer::Header);
        if let Some(cur) = current {
            b.push(Primitive::Image {
                symbol_code: cur.symbol_code().to_string(),
                rect: Rect::from_ltwh(5.0, 5.0, 60.0, 60.0),
            });
            b.text(Point::new(70.0, 55.0), format!("{}°C", cur.temperature()), &palette.temperature, Some(55.0));
            b.push(Primitive::Wind(wind_barb(
                cur.details.gust_speed(),
                cur.details.wind_from_direction,
                Point::new(300.0, 35.0),
                HEADER_WIND_SCALE,
                palette.wind.clone(),
            )));
        }
        b.text(Point::new(350.0, 55.0), self.opts.place.as_str(), &palette.place_name, Some(40.0));
    }
}

/// Whiskers at max and min, a stem between them and a tick at the expected amount.
fn error_bar(x: f64, y_max: f64, y_expected: f64, y_min: f64) -> Vec<PathCommand> {
    use PathCommand::{LineTo, MoveTo};
    let (l, r) = (x - 3.0, x + 3.0);
    vec![
        MoveTo(Point::new(l, y_max)),
        LineTo(Point::new(r, y_max)),
        MoveTo(Point::new(x, y_max)),
        LineTo(Point::new(x, y_min)),
        MoveTo(Point::new(l, y_min)),
        LineTo(Point::new(r, y_min)),
        MoveTo(Point::new(l, y_expected)),
        LineTo(Point::new(r, y_expected)),
    ]
}
