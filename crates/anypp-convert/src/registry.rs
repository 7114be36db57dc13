//! Registry for readers and writers.

use crate::points::PointSet;
use crate::traits::{ReadError, Reader, Writer};
use std::sync::{OnceLock, RwLock};

/// Global reader registry.
static READERS: RwLock<Vec<&'static dyn Reader>> = RwLock::new(Vec::new());
static READERS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Global writer registry.
static WRITERS: RwLock<Vec<&'static dyn Writer>> = RwLock::new(Vec::new());
static WRITERS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom reader.
pub fn register_reader(reader: &'static dyn Reader) {
    READERS.write().unwrap().push(reader);
}

/// Register a custom writer.
pub fn register_writer(writer: &'static dyn Writer) {
    WRITERS.write().unwrap().push(writer);
}

fn init_readers() {
    READERS_INITIALIZED.get_or_init(|| {
        #[cfg(feature = "read-pickpoints")]
        {
            register_reader(&crate::input::pickpoints::PICKPOINTS_READER);
        }
        #[cfg(feature = "read-anyscript")]
        {
            register_reader(&crate::input::anyscript::ANYSCRIPT_READER);
        }
    });
}

fn init_writers() {
    WRITERS_INITIALIZED.get_or_init(|| {
        #[cfg(feature = "write-anyscript")]
        {
            register_writer(&crate::output::anyscript::POINTCLOUD_WRITER);
            register_writer(&crate::output::anyscript::DECLARATIONS_WRITER);
        }
        #[cfg(feature = "write-pickpoints")]
        {
            register_writer(&crate::output::pickpoints::PICKPOINTS_WRITER);
        }
    });
}

/// Get a reader by format name.
pub fn reader_for_format(format: &str) -> Option<&'static dyn Reader> {
    init_readers();
    READERS
        .read()
        .unwrap()
        .iter()
        .find(|r| r.format() == format)
        .copied()
}

/// Get a reader by file extension.
pub fn reader_for_extension(ext: &str) -> Option<&'static dyn Reader> {
    init_readers();
    READERS
        .read()
        .unwrap()
        .iter()
        .find(|r| r.extensions().contains(&ext))
        .copied()
}

/// Get the first reader that recognizes `source`.
pub fn detect_reader(source: &str) -> Option<&'static dyn Reader> {
    init_readers();
    READERS
        .read()
        .unwrap()
        .iter()
        .find(|r| r.detect(source))
        .copied()
}

/// Detect the format of `source` and read it.
pub fn read_detected(source: &str) -> Result<(&'static dyn Reader, PointSet), ReadError> {
    let reader = detect_reader(source).ok_or_else(|| {
        ReadError::Unsupported("input is neither a pick-points file nor AnyScript points".into())
    })?;
    let points = reader.read(source)?;
    Ok((reader, points))
}

/// Get a writer by format name.
pub fn writer_for_format(format: &str) -> Option<&'static dyn Writer> {
    init_writers();
    WRITERS
        .read()
        .unwrap()
        .iter()
        .find(|w| w.format() == format)
        .copied()
}

/// Get all registered readers.
pub fn readers() -> Vec<&'static dyn Reader> {
    init_readers();
    READERS.read().unwrap().clone()
}

/// Get all registered writers.
pub fn writers() -> Vec<&'static dyn Writer> {
    init_writers();
    WRITERS.read().unwrap().clone()
}
