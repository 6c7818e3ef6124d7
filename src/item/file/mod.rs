//! Plain text files looked up by name and type in a base directory.
//!
//! The reader and the writer resolve `<name>.<type>` against the same base
//! directory (the "bundle"), so text loaded with one can be saved back to the
//! same location with the other.
//!
//! # Examples
//!
//! ```
//! use csv_report_rs::core::item::{TextReader, TextWriter};
//! use csv_report_rs::item::file::{
//!     file_reader::BundleFileReaderBuilder, file_writer::AtomicFileWriterBuilder,
//! };
//!
//! let dir = tempfile::tempdir().unwrap();
//!
//! let writer = AtomicFileWriterBuilder::new().base_dir(dir.path()).build();
//! writer.write("data", "txt", "a,b\n1,2\n").unwrap();
//!
//! let reader = BundleFileReaderBuilder::new().base_dir(dir.path()).build();
//! assert_eq!(reader.read("data", "txt").unwrap(), "a,b\n1,2\n");
//! ```

use std::path::{Path, PathBuf};

/// A module providing a reader for text files in a base directory.
pub mod file_reader;

/// A module providing an atomic writer for text files in a base directory.
pub mod file_writer;

/// File type used when none is given.
pub const DEFAULT_FILE_TYPE: &str = "txt";

/// Resolves `<name>.<file_type>` inside `base_dir`; an empty type leaves the
/// name without extension.
pub fn resolve(base_dir: &Path, name: &str, file_type: &str) -> PathBuf {
    if file_type.is_empty() {
        base_dir.join(name)
    } else {
        base_dir.join(format!("{}.{}", name, file_type))
    }
}
