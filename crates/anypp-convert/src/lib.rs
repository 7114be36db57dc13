//! Conversion between MeshLab pick-points files and AnyScript point literals.
//!
//! `anypp-convert` reads named 3D landmark points from one textual format
//! into an ordered [`PointSet`] and writes them out in another.
//!
//! # Architecture
//!
//! ```text
//! Source Formats          IR               Target Formats
//! ──────────────────   ──────────────   ─────────────────────────
//! pick-points XML   ─┐                 ┌─> AnyScript pointcloud
//!                    ├─> PointSet ─────┼─> AnyScript declarations
//! AnyScript lines   ─┘   (points.rs)   └─> pick-points XML
//! ```
//!
//! # Example
//!
//! ```ignore
//! use anypp_convert::{input, output};
//!
//! let points = input::read_pickpoints(xml)?;
//! let anyscript = output::AnyScriptWriter::pointcloud(&points);
//! // => "{1.0, 2.0, 3.0} // P1\n"
//! ```
//!
//! # Lenient literals
//!
//! AnyBody console output is not valid under any standard literal grammar:
//! arrays use braces, NaN is printed as a bare `nan`, and long values are
//! elided as `{...}`. [`parse_literal`] layers a strict recursive-descent
//! parse under increasingly permissive rewrites so pasted output still
//! converts.

pub mod literal;
pub mod names;
pub mod points;
pub mod registry;
pub mod signal_last;
pub mod traits;
pub mod value_eq;

pub mod input;
pub mod output;

// Re-exports: IR types
pub use literal::{Literal, LiteralError, parse_literal};
pub use points::{Point, PointSet};
pub use value_eq::ValueEq;

// Re-exports: helpers
pub use names::sanitize_name;
pub use signal_last::{SignalLast, SignalLastExt};

// Re-exports: Traits
pub use traits::{ReadError, Reader, Writer};

// Re-exports: Registry
pub use registry::{
    detect_reader, reader_for_extension, reader_for_format, readers, register_reader,
    register_writer, writer_for_format, writers,
};

// Re-exports: Built-in readers
#[cfg(feature = "read-anyscript")]
pub use input::anyscript::{AnyScriptReader, read_anyscript};
#[cfg(feature = "read-pickpoints")]
pub use input::pickpoints::{PickPointsReader, read_pickpoints};

// Re-exports: Built-in writers
#[cfg(feature = "write-anyscript")]
pub use output::anyscript::{AnyScriptWriter, DeclarationsWriterImpl, PointcloudWriterImpl};
#[cfg(feature = "write-pickpoints")]
pub use output::pickpoints::{PickPointsWriter, PickPointsWriterImpl, write_pickpoints};
