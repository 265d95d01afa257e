// File: crates/wx-core/src/svg.rs
// Summary: SVG serialization of a canvas, the reference format handed to external rasterizers.

use ::svg::node::element::{Circle, Group, Image, Line, Path, Polygon, Polyline, Rectangle, Text};
use ::svg::node::Node;
use ::svg::Document;

use crate::canvas::{Canvas, Fill, PathCommand, Primitive, Stroke};
use crate::geometry::Point;
use crate::windbarb::WindGlyph;

/// Where sky-condition icons are resolved from.
#[derive(Clone, Debug)]
pub struct SvgOptions {
    /// Prefix joined with `/<symbol_code>.svg` to form each icon href.
    pub icon_prefix: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { icon_prefix: "weather/svg".to_string() }
    }
}

impl SvgOptions {
    pub fn icon_href(&self, symbol_code: &str) -> String {
        format!("{}/{}.svg", self.icon_prefix.trim_end_matches('/'), symbol_code)
    }
}

fn document(width: f64, height: f64) -> Document {
    Document::new()
        .set("height", height)
        .set("width", width)
        .set("xmlns", "http://www.w3.org/2000/svg")
}

pub fn to_svg(canvas: &Canvas, opts: &SvgOptions) -> String {
    let doc = canvas
        .primitives()
        .fold(document(canvas.width, canvas.height), |doc, p| add_primitive(doc, p, opts));
    format!("{doc}\n")
}

/// Render free-standing glyphs with optional labels, e.g. a wind-barb sheet.
pub fn glyph_sheet_svg(width: f64, height: f64, glyphs: &[(String, Point, WindGlyph)]) -> String {
    let doc = glyphs.iter().fold(document(width, height), |doc, (label, at, glyph)| {
        doc.add(Text::new(label.as_str()).set("x", at.x).set("y", at.y)).add(wind_group(glyph))
    });
    format!("{doc}\n")
}

fn add_primitive(doc: Document, p: &Primitive, opts: &SvgOptions) -> Document {
    match p {
        Primitive::Rect { rect, fill, stroke } => doc.add(paint(
            Rectangle::new()
                .set("x", rect.left)
                .set("y", rect.top)
                .set("width", rect.width())
                .set("height", rect.height()),
            fill.as_ref(),
            stroke.as_ref(),
        )),
        Primitive::Line { from, to, stroke } => doc.add(paint(
            Line::new().set("x1", from.x).set("y1", from.y).set("x2", to.x).set("y2", to.y),
            None,
            Some(stroke),
        )),
        Primitive::Polyline { points, stroke } => {
            doc.add(paint(Polyline::new().set("points", point_list(points)), None, Some(stroke)))
        }
        Primitive::Polygon { points, fill, stroke } => {
            doc.add(paint(Polygon::new().set("points", point_list(points)), Some(fill), stroke.as_ref()))
        }
        Primitive::Path { commands, stroke } => {
            doc.add(paint(Path::new().set("d", path_data(commands)), None, Some(stroke)))
        }
        Primitive::Text { anchor, content, color, size } => {
            let mut text = Text::new(content.as_str()).set("x", anchor.x).set("y", anchor.y).set("fill", color.as_str());
            if let Some(size) = size {
                text = text.set("font-size", *size);
            }
            doc.add(text)
        }
        Primitive::Image { symbol_code, rect } => doc.add(
            Image::new()
                .set("x", rect.left)
                .set("y", rect.top)
                .set("width", rect.width())
                .set("height", rect.height())
                .set("href", opts.icon_href(symbol_code)),
        ),
        Primitive::Wind(glyph) => doc.add(wind_group(glyph)),
    }
}

/// Glyph drawn in its local frame inside a transformed group.
fn wind_group(glyph: &WindGlyph) -> Group {
    let stroke = Stroke::new(&glyph.color, glyph.stroke_width());
    if let Some(r) = glyph.calm_radius() {
        return Group::new()
            .set("transform", format!("translate({} {})", glyph.anchor.x, glyph.anchor.y))
            .add(paint(Circle::new().set("r", r), None, Some(&stroke)));
    }
    let mut group = Group::new()
        .set(
            "transform",
            format!("translate({} {}) rotate({}) scale({})", glyph.anchor.x, glyph.anchor.y, glyph.direction, glyph.scale),
        )
        .add(paint(Path::new().set("d", path_data(&glyph.stroke_path())), None, Some(&stroke)));
    let fill = glyph.fill_path();
    if !fill.is_empty() {
        group = group.add(paint(Path::new().set("d", path_data(&fill)), Some(&Fill::solid(&glyph.color)), None));
    }
    group
}

fn paint<N: Node>(mut node: N, fill: Option<&Fill>, stroke: Option<&Stroke>) -> N {
    match fill {
        Some(f) => {
            node.assign("fill", f.color.as_str());
            if f.opacity < 1.0 {
                node.assign("fill-opacity", f.opacity);
            }
        }
        None => node.assign("fill", "none"),
    }
    match stroke {
        Some(st) => {
            node.assign("stroke", st.color.as_str());
            node.assign("stroke-width", st.width);
        }
        None => node.assign("stroke", "none"),
    }
    node
}

fn point_list(points: &[Point]) -> String {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}

fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|c| match c {
            PathCommand::MoveTo(p) => format!("M{} {}", p.x, p.y),
            PathCommand::LineTo(p) => format!("L{} {}", p.x, p.y),
            PathCommand::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
