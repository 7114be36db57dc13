//! AnyScript writers.
//!
//! Two renderings of the same point set:
//!
//! ```text
//! {1.0, 2.0, 3.0}, // P1          pointcloud: comma on all but the last line
//! {4.0, 5.0, 6.0} // P2
//!
//! AnyFloat P1 = {1.0,2.0, 3.0};   declarations
//! AnyFloat P2 = {4.0,5.0, 6.0};
//! ```
//!
//! Names are sanitized to AnyScript identifiers in both forms.

use super::Decimal;
use crate::names::{is_sanitized, sanitize_name};
use crate::points::{Point, PointSet};
use crate::signal_last::SignalLastExt;
use crate::traits::Writer;
use tracing::debug;

/// Static instance of the pointcloud writer for registry.
pub static POINTCLOUD_WRITER: PointcloudWriterImpl = PointcloudWriterImpl;

/// Static instance of the declarations writer for registry.
pub static DECLARATIONS_WRITER: DeclarationsWriterImpl = DeclarationsWriterImpl;

/// Pointcloud writer implementing the Writer trait.
pub struct PointcloudWriterImpl;

impl Writer for PointcloudWriterImpl {
    fn format(&self) -> &'static str {
        "anyscript-pointcloud"
    }

    fn extension(&self) -> &'static str {
        "any"
    }

    fn title(&self) -> &'static str {
        "Point cloud"
    }

    fn write(&self, points: &PointSet) -> String {
        AnyScriptWriter::pointcloud(points)
    }
}

/// Declarations writer implementing the Writer trait.
pub struct DeclarationsWriterImpl;

impl Writer for DeclarationsWriterImpl {
    fn format(&self) -> &'static str {
        "anyscript-declarations"
    }

    fn extension(&self) -> &'static str {
        "any"
    }

    fn title(&self) -> &'static str {
        "Anyscript values"
    }

    fn write(&self, points: &PointSet) -> String {
        AnyScriptWriter::declarations(points)
    }
}

/// Emits a point set as AnyScript source.
pub struct AnyScriptWriter {
    output: String,
}

impl AnyScriptWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Emit one `{x, y, z}, // name` line per point.
    pub fn pointcloud(points: &PointSet) -> String {
        let mut writer = Self::new();
        for (is_last, (name, point)) in points.iter().signal_last() {
            writer.write_pointcloud_line(name, point, is_last);
        }
        writer.output
    }

    /// Emit one `AnyFloat name = {x,y, z};` line per point.
    pub fn declarations(points: &PointSet) -> String {
        let mut writer = Self::new();
        for (name, point) in points {
            writer.write_declaration(name, point);
        }
        writer.output
    }

    fn write_pointcloud_line(&mut self, name: &str, point: &Point, is_last: bool) {
        let comma = if is_last { "" } else { "," };
        self.output.push_str(&format!(
            "{{{}, {}, {}}}{comma} // {}\n",
            Decimal(point.x),
            Decimal(point.y),
            Decimal(point.z),
            identifier(name),
        ));
    }

    fn write_declaration(&mut self, name: &str, point: &Point) {
        // `{x,y, z}`: no space after the first comma.
        self.output.push_str(&format!(
            "AnyFloat {} = {{{},{}, {}}};\n",
            identifier(name),
            Decimal(point.x),
            Decimal(point.y),
            Decimal(point.z),
        ));
    }
}

impl Default for AnyScriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn identifier(name: &str) -> String {
    let sanitized = sanitize_name(name);
    if !is_sanitized(name) {
        debug!(original = name, identifier = %sanitized, "renamed point");
    }
    sanitized
}
