//! Pick-points writer.
//!
//! Emits `<point .../>` lines only, with no XML declaration or root element,
//! so the output can be pasted into an existing `.pp` document.

use super::Decimal;
use crate::points::{Point, PointSet};
use crate::traits::Writer;

/// Static instance of the pick-points writer for registry.
pub static PICKPOINTS_WRITER: PickPointsWriterImpl = PickPointsWriterImpl;

/// Pick-points writer implementing the Writer trait.
pub struct PickPointsWriterImpl;

impl Writer for PickPointsWriterImpl {
    fn format(&self) -> &'static str {
        "pickpoints"
    }

    fn extension(&self) -> &'static str {
        "pp"
    }

    fn title(&self) -> &'static str {
        "Picked points"
    }

    fn write(&self, points: &PointSet) -> String {
        write_pickpoints(points)
    }
}

/// Render `points` as pick-points `<point/>` lines.
pub fn write_pickpoints(points: &PointSet) -> String {
    PickPointsWriter::emit(points)
}

/// Emits a point set as pick-points XML elements.
pub struct PickPointsWriter {
    output: String,
}

impl PickPointsWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Emit one `<point/>` element per line, keeping the original names.
    pub fn emit(points: &PointSet) -> String {
        let mut writer = Self::new();
        for (name, point) in points {
            writer.write_point(name, point);
        }
        writer.output
    }

    fn write_point(&mut self, name: &str, point: &Point) {
        self.output.push_str(&format!(
            "<point x=\"{}\" y=\"{}\" z=\"{}\" active=\"1\" name=\"{}\" />\n",
            Decimal(point.x),
            Decimal(point.y),
            Decimal(point.z),
            escape_attr(name),
        ));
    }
}

impl Default for PickPointsWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
