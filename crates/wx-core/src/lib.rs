// File: crates/wx-core/src/lib.rs
// Summary: Core library entry point; exports the forecast timeline, scale solving and chart rendering API.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod error;
pub mod forecast;
pub mod geometry;
pub mod ingest;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod timeline;
pub mod types;
pub mod windbarb;

pub use axis::LabelZone;
pub use canvas::{Canvas, Layer, Primitive};
pub use chart::{ChartRenderer, RenderOptions};
pub use error::Error;
pub use forecast::{ForecastPoint, InstantDetails, NextHourSummary};
pub use scale::{CoordinateMapper, Scale};
pub use crate::svg::{to_svg, SvgOptions};
pub use theme::{Color, Palette};
pub use timeline::{ForecastTimeline, TimelineState, Window};
pub use windbarb::{wind_barb, WindGlyph};
