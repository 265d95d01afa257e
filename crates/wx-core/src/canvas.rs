// File: crates/wx-core/src/canvas.rs
// Summary: Backend-agnostic drawing primitives and the layered canvas builder.

use std::path::Path;

use anyhow::{Context, Result};

use crate::geometry::{Point, Rect};
use crate::theme::Color;
use crate::windbarb::WindGlyph;

/// Chart layers in paint order; later layers draw over earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Precipitation,
    Temperature,
    Grid,
    SkyIcons,
    Wind,
    Header,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: &Color, width: f64) -> Self {
        Self { color: color.clone(), width }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    pub color: Color,
    pub opacity: f64,
}

impl Fill {
    pub fn solid(color: &Color) -> Self {
        Self { color: color.clone(), opacity: 1.0 }
    }

    pub fn translucent(color: &Color, opacity: f64) -> Self {
        Self { color: color.clone(), opacity }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect { rect: Rect, fill: Option<Fill>, stroke: Option<Stroke> },
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    Polygon { points: Vec<Point>, fill: Fill, stroke: Option<Stroke> },
    Path { commands: Vec<PathCommand>, stroke: Stroke },
    Text { anchor: Point, content: String, color: Color, size: Option<f64> },
    /// Sky-condition icon looked up by symbol code by the backend.
    Image { symbol_code: String, rect: Rect },
    Wind(WindGlyph),
}

impl Primitive {
    /// Number of straight segments a polyline contributes.
    pub fn segment_count(&self) -> usize {
        match self {
            Primitive::Line { .. } => 1,
            Primitive::Polyline { points, .. } => points.len().saturating_sub(1),
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub primitive: Primitive,
}

/// Ordered list of primitives for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    items: Vec<DrawItem>,
}

impl Canvas {
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.items.iter().map(|i| &i.primitive)
    }

    /// Primitives belonging to one layer, in paint order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> {
        self.items.iter().filter(move |i| i.layer == layer).map(|i| &i.primitive)
    }

    /// Layers present, in paint order, without repeats.
    pub fn layers(&self) -> Vec<Layer> {
        let mut out: Vec<Layer> = Vec::new();
        for item in &self.items {
            if out.last() != Some(&item.layer) {
                out.push(item.layer);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize to SVG and write it to `path`, creating parent directories.
    pub fn write_svg(&self, path: impl AsRef<Path>, icons: &crate::svg::SvgOptions) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, crate::svg::to_svg(self, icons))
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Accumulates primitives layer by layer. Layers must be opened in
/// [`Layer`] order.
#[derive(Debug)]
pub struct CanvasBuilder {
    width: f64,
    height: f64,
    layer: Layer,
    items: Vec<DrawItem>,
}

impl CanvasBuilder {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, layer: Layer::Background, items: Vec::new() }
    }

    /// Switch to `layer`; subsequent pushes belong to it.
    pub fn begin(&mut self, layer: Layer) -> &mut Self {
        debug_assert!(layer >= self.layer, "layer {layer:?} opened after {:?}", self.layer);
        self.layer = layer;
        self
    }

    pub fn push(&mut self, primitive: Primitive) -> &mut Self {
        self.items.push(DrawItem { layer: self.layer, primitive });
        self
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> &mut Self {
        self.push(Primitive::Line { from, to, stroke })
    }

    pub fn text(&mut self, anchor: Point, content: impl Into<String>, color: &Color, size: Option<f64>) -> &mut Self {
        self.push(Primitive::Text { anchor, content: content.into(), color: color.clone(), size })
    }

    pub fn finish(self) -> Canvas {
        Canvas { width: self.width, height: self.height, items: self.items }
    }
}
