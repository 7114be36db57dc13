//! Input readers - parse source documents into a point set.

#[cfg(feature = "read-pickpoints")]
pub mod pickpoints;

#[cfg(feature = "read-pickpoints")]
pub use pickpoints::{PICKPOINTS_DOCTYPE, PICKPOINTS_READER, PickPointsReader, read_pickpoints};

#[cfg(feature = "read-anyscript")]
pub mod anyscript;

#[cfg(feature = "read-anyscript")]
pub use anyscript::{ANYSCRIPT_READER, AnyScriptReader, read_anyscript};
