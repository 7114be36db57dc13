//! AnyScript point-literal reader.
//!
//! Reads the pointcloud form written by
//! [`AnyScriptWriter::pointcloud`](crate::output::AnyScriptWriter::pointcloud)
//! as well as values pasted from the AnyBody console:
//!
//! ```text
//! {0.012, -0.2, 0.98}, // RASIS
//! {nan, 0.1, 0.3} // LASIS
//! ```
//!
//! Lines that do not hold a point are ignored.

use crate::literal::parse_literal;
use crate::points::PointSet;
use crate::traits::{ReadError, Reader};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Static instance of the AnyScript reader for registry.
pub static ANYSCRIPT_READER: AnyScriptReader = AnyScriptReader;

/// AnyScript pointcloud reader.
pub struct AnyScriptReader;

impl Reader for AnyScriptReader {
    fn format(&self) -> &'static str {
        "anyscript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["any"]
    }

    fn detect(&self, source: &str) -> bool {
        source.contains('=') && source.trim().starts_with('{')
    }

    fn read(&self, source: &str) -> Result<PointSet, ReadError> {
        Ok(read_anyscript(source))
    }
}

/// A `{...}` value, optional comma, optional `//` comment holding the name.
///
/// The value group is greedy so nested braces are captured whole.
fn point_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\{.*\})\s*,?\s*(?://)?\W*(.*?)\s*$").unwrap())
}

/// Collect every line of `source` that holds a named point.
pub fn read_anyscript(source: &str) -> PointSet {
    let mut points = PointSet::new();
    for (index, line) in source.lines().enumerate() {
        let Some(caps) = point_line().captures(line) else {
            continue;
        };
        let (value, name) = (&caps[1], &caps[2]);

        let literal = match parse_literal(value) {
            Ok(literal) => literal,
            Err(err) => {
                trace!(line = index + 1, %err, "skipping unparsable value");
                continue;
            }
        };
        let Some(point) = literal.as_point() else {
            trace!(line = index + 1, ?literal, "skipping value that is not a point");
            continue;
        };
        points.insert(name, point);
    }

    debug!(count = points.len(), "read anyscript points");
    points
}
