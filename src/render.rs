//! SVG output for placed circles
//!
//! The browser front end turns `circle_attributes` into DOM nodes; the native
//! binary writes the same attributes as an `svg::Document` to stdout.

use std::io;

use glam::Vec2;
use svg::Document;
use svg::node::element::Circle as SvgCircle;

use crate::placement::{Area, Circle, Rgb};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Attribute pairs for one `<circle>` element
pub fn circle_attributes(pos: Vec2, color: Rgb, radius: f32) -> [(&'static str, String); 4] {
    [
        ("r", radius.to_string()),
        ("cx", pos.x.to_string()),
        ("cy", pos.y.to_string()),
        ("style", format!("fill:{color}")),
    ]
}

/// `<circle>` node carrying the same attributes the DOM path sets
pub fn circle_node(circle: &Circle, radius: f32) -> SvgCircle {
    circle_attributes(circle.pos, circle.color, radius)
        .into_iter()
        .fold(SvgCircle::new(), |node, (name, value)| node.set(name, value))
}

/// Standalone SVG document sized to `area`
pub fn make_document(circles: &[Circle], area: &Area, radius: f32) -> Document {
    let document = Document::new()
        .set("width", area.width)
        .set("height", area.height)
        .set("viewBox", (0.0, 0.0, area.width, area.height));

    circles
        .iter()
        .fold(document, |doc, circle| doc.add(circle_node(circle, radius)))
}

/// Serialized document
pub fn render_document(circles: &[Circle], area: &Area, radius: f32) -> String {
    make_document(circles, area, radius).to_string()
}

/// Write the document to `out`
pub fn write_document<W: io::Write>(
    out: W,
    circles: &[Circle],
    area: &Area,
    radius: f32,
) -> io::Result<()> {
    svg::write(out, &make_document(circles, area, radius))
}
