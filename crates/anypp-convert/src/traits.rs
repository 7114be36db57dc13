//! Traits for point-set readers and writers.

use crate::points::PointSet;

/// Error that can occur when reading a source document into a point set.
///
/// Individual malformed points or lines are not errors; readers drop them
/// and keep going. Only a document that cannot be read at all fails.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("could not parse XML file: {0}")]
    Xml(String),

    #[error("unsupported input: {0}")]
    Unsupported(String),
}

/// A reader parses a source document into a [`PointSet`].
pub trait Reader: Send + Sync {
    /// Format identifier (e.g., "pickpoints", "anyscript").
    fn format(&self) -> &'static str;

    /// File extensions this reader handles (e.g., &["pp"]).
    fn extensions(&self) -> &'static [&'static str];

    /// Whether `source` looks like a document of this format.
    fn detect(&self, source: &str) -> bool;

    /// Parse the source into points.
    fn read(&self, source: &str) -> Result<PointSet, ReadError>;
}

/// A writer renders a [`PointSet`] as text in a target format.
pub trait Writer: Send + Sync {
    /// Format identifier (e.g., "pickpoints", "anyscript-pointcloud").
    fn format(&self) -> &'static str;

    /// File extension for output (e.g., "any").
    fn extension(&self) -> &'static str;

    /// Human-readable name, used as a section banner.
    fn title(&self) -> &'static str;

    /// Render the points.
    fn write(&self, points: &PointSet) -> String;
}
