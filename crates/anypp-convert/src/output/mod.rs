//! Output writers - render a point set as text.

use std::fmt;

#[cfg(feature = "write-anyscript")]
pub mod anyscript;

#[cfg(feature = "write-anyscript")]
pub use anyscript::{
    AnyScriptWriter, DECLARATIONS_WRITER, DeclarationsWriterImpl, POINTCLOUD_WRITER,
    PointcloudWriterImpl,
};

#[cfg(feature = "write-pickpoints")]
pub mod pickpoints;

#[cfg(feature = "write-pickpoints")]
pub use pickpoints::{PICKPOINTS_WRITER, PickPointsWriter, PickPointsWriterImpl, write_pickpoints};

/// Displays an `f64` in its natural decimal form.
///
/// The shortest text that parses back to the same value, always with a
/// decimal point or exponent (`1.0`, `0.25`, `1e-7`). NaN is `nan` and
/// infinities are `inf`/`-inf`, which both readers accept.
#[derive(Debug, Clone, Copy)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("nan")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{v:?}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_forms() {
        assert_eq!(Decimal(1.0).to_string(), "1.0");
        assert_eq!(Decimal(-2.5).to_string(), "-2.5");
        assert_eq!(Decimal(0.1).to_string(), "0.1");
        assert_eq!(Decimal(-0.0).to_string(), "-0.0");
        assert_eq!(Decimal(f64::NAN).to_string(), "nan");
        assert_eq!(Decimal(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_decimal_round_trips() {
        for v in [0.1 + 0.2, 1e-7, 123456.789, -1e300, f64::MIN_POSITIVE] {
            assert_eq!(Decimal(v).to_string().parse::<f64>().unwrap(), v);
        }
    }
}
