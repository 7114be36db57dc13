//! MeshLab pick-points reader.
//!
//! A `.pp` file looks like:
//!
//! ```xml
//! <!DOCTYPE PickedPoints>
//! <PickedPoints>
//!  <DocumentData> ... </DocumentData>
//!  <point x="0.12" y="-0.4" z="1.1" active="1" name="RASIS"/>
//! </PickedPoints>
//! ```
//!
//! Every `point` element anywhere in the document is read, in document order.

use crate::points::{Point, PointSet};
use crate::traits::{ReadError, Reader};
use tracing::{debug, trace};

/// Header every pick-points file starts with.
pub const PICKPOINTS_DOCTYPE: &str = "<!DOCTYPE PickedPoints>";

/// Static instance of the pick-points reader for registry.
pub static PICKPOINTS_READER: PickPointsReader = PickPointsReader;

/// Pick-points XML reader.
pub struct PickPointsReader;

impl Reader for PickPointsReader {
    fn format(&self) -> &'static str {
        "pickpoints"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pp"]
    }

    fn detect(&self, source: &str) -> bool {
        source.starts_with(PICKPOINTS_DOCTYPE)
    }

    fn read(&self, source: &str) -> Result<PointSet, ReadError> {
        read_pickpoints(source)
    }
}

/// Parse pick-points XML into a point set.
///
/// Fails only if the document is not well-formed. Points with a missing
/// attribute or a non-numeric coordinate are skipped.
pub fn read_pickpoints(source: &str) -> Result<PointSet, ReadError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(source, options)
        .map_err(|err| ReadError::Xml(err.to_string()))?;

    let mut points = PointSet::new();
    for node in doc.descendants().filter(|n| n.has_tag_name("point")) {
        match read_point(node) {
            Some((name, point)) => {
                points.insert(name, point);
            }
            None => trace!(
                pos = ?doc.text_pos_at(node.range().start),
                "skipping malformed point"
            ),
        }
    }

    debug!(count = points.len(), "read pick-points");
    Ok(points)
}

fn read_point<'a>(node: roxmltree::Node<'a, '_>) -> Option<(&'a str, Point)> {
    let coord = |attr: &str| node.attribute(attr)?.trim().parse::<f64>().ok();
    let point = Point::new(coord("x")?, coord("y")?, coord("z")?);
    Some((node.attribute("name")?, point))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<!DOCTYPE PickedPoints>
<PickedPoints>
 <DocumentData>
  <DateTime time="10:02:11" date="2021-03-04"/>
  <User name="mel"/>
  <DataFileName name="femur.ply"/>
 </DocumentData>
 <point x="1.0" y="2.0" z="3.0" active="1" name="P1"/>
 <point x="-0.5" y="1e-3" z=" 4 " active="1" name="Lateral epicondyle"/>
</PickedPoints>
"#;

    #[test]
    fn test_reads_points_in_order() {
        let points = read_pickpoints(SAMPLE).unwrap();
        assert_eq!(points.names().collect::<Vec<_>>(), ["P1", "Lateral epicondyle"]);
        assert_eq!(points.get("P1"), Some(&Point::new(1.0, 2.0, 3.0)));
        assert_eq!(
            points.get("Lateral epicondyle"),
            Some(&Point::new(-0.5, 0.001, 4.0))
        );
    }

    #[test]
    fn test_malformed_point_is_dropped() {
        let xml = r#"<!DOCTYPE PickedPoints>
<PickedPoints>
 <point x="a" y="1" z="2" name="Q"/>
 <point x="0" y="1" z="2" name="R"/>
</PickedPoints>"#;
        let points = read_pickpoints(xml).unwrap();
        assert!(!points.contains("Q"));
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_missing_attributes_are_dropped() {
        let xml = r#"<PickedPoints>
 <point x="0" y="1" name="no-z"/>
 <point x="0" y="1" z="2"/>
</PickedPoints>"#;
        assert!(read_pickpoints(xml).unwrap().is_empty());
    }

    #[test]
    fn test_nan_coordinates_are_kept() {
        let xml = r#"<PickedPoints><point x="nan" y="1" z="2" name="N"/></PickedPoints>"#;
        let points = read_pickpoints(xml).unwrap();
        assert!(points.get("N").unwrap().x.is_nan());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let xml = r#"<PickedPoints>
 <point x="1" y="1" z="1" name="A"/>
 <point x="2" y="2" z="2" name="B"/>
 <point x="3" y="3" z="3" name="A"/>
</PickedPoints>"#;
        let points = read_pickpoints(xml).unwrap();
        assert_eq!(points.names().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(points.get("A"), Some(&Point::new(3.0, 3.0, 3.0)));
    }

    #[test]
    fn test_not_well_formed_is_an_error() {
        let err = read_pickpoints("<!DOCTYPE PickedPoints>\n<PickedPoints><point").unwrap_err();
        assert!(matches!(err, ReadError::Xml(_)));
        assert!(err.to_string().starts_with("could not parse XML file: "));
    }

    #[test]
    fn test_detect() {
        assert!(PICKPOINTS_READER.detect(SAMPLE));
        assert!(!PICKPOINTS_READER.detect("<PickedPoints/>"));
        assert!(!PICKPOINTS_READER.detect("{1, 2, 3}, // P1"));
    }
}
