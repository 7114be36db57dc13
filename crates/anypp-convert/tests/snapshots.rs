//! Snapshot tests for readers and writers.
//!
//! These tests verify that parsing and emission produce expected output.
//! Run `cargo insta review` to update snapshots after intentional changes.

use anypp_convert::{Point, PointSet, ValueEq};

const PICKPOINTS: &str = r#"<!DOCTYPE PickedPoints>
<PickedPoints>
 <DocumentData>
  <DateTime time="14:31:07" date="2022-11-02"/>
  <User name="anybody"/>
  <DataFileName name="pelvis.stl"/>
  <templateName name=""/>
 </DocumentData>
 <point x="0.1213" y="-0.0521" z="0.0987" active="1" name="RASIS"/>
 <point x="-0.1208" y="-0.0517" z="0.1002" active="1" name="LASIS"/>
 <point x="oops" y="0" z="0" active="1" name="Broken"/>
 <point x="0.0021" y="-0.1650" z="-0.0133" active="0" name="Sacrum.Tip"/>
</PickedPoints>
"#;

// ============================================================================
// Reader Snapshots - verify parsed points are correct
// ============================================================================

mod pickpoints_reader {
    use super::*;
    use anypp_convert::input::read_pickpoints;

    #[test]
    fn pelvis_landmarks() {
        let points = read_pickpoints(PICKPOINTS).expect("parse failed");
        insta::assert_debug_snapshot!(points, @r#"
        {
            "RASIS": Point {
                x: 0.1213,
                y: -0.0521,
                z: 0.0987,
            },
            "LASIS": Point {
                x: -0.1208,
                y: -0.0517,
                z: 0.1002,
            },
            "Sacrum.Tip": Point {
                x: 0.0021,
                y: -0.165,
                z: -0.0133,
            },
        }
        "#);
    }

    #[test]
    fn not_xml() {
        let err = read_pickpoints("<!DOCTYPE PickedPoints>\n<PickedPoints>").unwrap_err();
        assert!(err.to_string().starts_with("could not parse XML file"));
    }
}

mod anyscript_reader {
    use anypp_convert::input::read_anyscript;

    #[test]
    fn console_paste() {
        // Copied from the AnyBody model tree, with a stray header and footer.
        let points = read_anyscript(
            "Main.Model.Landmarks = \n\
             {\n\
             \x20 {0.1213, -0.0521, 0.0987}, // RASIS\n\
             \x20 {nan, -0.0517, 0.1002}, // LASIS\n\
             \x20 {...}, // Elided\n\
             \x20 {0.0021, -0.165, nan} // Sacrum_Tip\n\
             };\n",
        );
        insta::assert_debug_snapshot!(points, @r#"
        {
            "RASIS": Point {
                x: 0.1213,
                y: -0.0521,
                z: 0.0987,
            },
            "LASIS": Point {
                x: NaN,
                y: -0.0517,
                z: 0.1002,
            },
            "Sacrum_Tip": Point {
                x: 0.0021,
                y: -0.165,
                z: NaN,
            },
        }
        "#);
    }
}

// ============================================================================
// Writer Snapshots - verify emitted text is correct
// ============================================================================

mod writers {
    use super::*;
    use anypp_convert::input::read_pickpoints;
    use anypp_convert::output::{AnyScriptWriter, PickPointsWriter};

    fn points() -> PointSet {
        read_pickpoints(PICKPOINTS).expect("parse failed")
    }

    #[test]
    fn pointcloud() {
        insta::assert_snapshot!(AnyScriptWriter::pointcloud(&points()), @r"
        {0.1213, -0.0521, 0.0987}, // RASIS
        {-0.1208, -0.0517, 0.1002}, // LASIS
        {0.0021, -0.165, -0.0133} // Sacrum_Tip
        ");
    }

    #[test]
    fn declarations() {
        insta::assert_snapshot!(AnyScriptWriter::declarations(&points()), @r"
        AnyFloat RASIS = {0.1213,-0.0521, 0.0987};
        AnyFloat LASIS = {-0.1208,-0.0517, 0.1002};
        AnyFloat Sacrum_Tip = {0.0021,-0.165, -0.0133};
        ");
    }

    #[test]
    fn pickpoints_fragment() {
        insta::assert_snapshot!(PickPointsWriter::emit(&points()), @r#"
        <point x="0.1213" y="-0.0521" z="0.0987" active="1" name="RASIS" />
        <point x="-0.1208" y="-0.0517" z="0.1002" active="1" name="LASIS" />
        <point x="0.0021" y="-0.165" z="-0.0133" active="1" name="Sacrum.Tip" />
        "#);
    }
}

// ============================================================================
// Round trips
// ============================================================================

mod round_trip {
    use super::*;
    use anypp_convert::input::{read_anyscript, read_pickpoints};
    use anypp_convert::output::{AnyScriptWriter, PickPointsWriter};

    fn landmarks() -> PointSet {
        [
            ("FemurHead", Point::new(0.0123, -0.4, 1.0)),
            ("Medial_Epicondyle", Point::new(-1e-7, 250.5, -0.0)),
            ("P3", Point::new(0.1 + 0.2, 1.0 / 3.0, 12345678.9)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn pickpoints_fragment_reads_back() {
        let xml = format!(
            "<!DOCTYPE PickedPoints>\n<PickedPoints>\n{}</PickedPoints>\n",
            PickPointsWriter::emit(&landmarks())
        );
        assert!(read_pickpoints(&xml).unwrap().value_eq(&landmarks()));
    }

    #[test]
    fn pointcloud_reads_back() {
        let text = AnyScriptWriter::pointcloud(&landmarks());
        assert!(read_anyscript(&text).value_eq(&landmarks()));
    }

    #[test]
    fn pointcloud_with_nan_reads_back() {
        let points: PointSet = [
            ("A", Point::new(f64::NAN, 1.0, 2.0)),
            ("B", Point::new(1.0, f64::NAN, 2.0)),
            ("C", Point::new(1.0, 2.0, f64::NAN)),
        ]
        .into_iter()
        .collect();
        let text = AnyScriptWriter::pointcloud(&points);
        assert!(read_anyscript(&text).value_eq(&points));
    }

    #[test]
    fn pointcloud_has_one_comma_less_than_lines() {
        for n in 1..=5 {
            let points: PointSet = (0..n)
                .map(|i| (format!("P{i}"), Point::new(i as f64, 0.0, 0.0)))
                .collect();
            let text = AnyScriptWriter::pointcloud(&points);
            let with_comma = text.lines().filter(|l| l.contains("}, //")).count();
            assert_eq!(text.lines().count(), n);
            assert_eq!(with_comma, n - 1);
        }
    }
}
