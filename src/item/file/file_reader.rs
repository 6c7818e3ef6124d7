use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, error};

use crate::{
    core::item::{TextReader, TextReaderResult},
    error::ReportError,
};

use super::resolve;

/// Reads whole text files from a base directory.
///
/// A missing file yields [`ReportError::NotFound`]; a file that exists but
/// cannot be read or is not valid UTF-8 yields [`ReportError::Unreadable`].
/// Both are logged before being returned.
///
/// # Examples
///
/// ```
/// use csv_report_rs::core::item::TextReader;
/// use csv_report_rs::error::ReportError;
/// use csv_report_rs::item::file::file_reader::BundleFileReaderBuilder;
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(dir.path().join("data.txt"), "a,b\n1,2").unwrap();
///
/// let reader = BundleFileReaderBuilder::new().base_dir(dir.path()).build();
///
/// assert_eq!(reader.read("data", "txt").unwrap(), "a,b\n1,2");
/// assert!(matches!(reader.read("missing", "txt"), Err(ReportError::NotFound { .. })));
/// assert_eq!(reader.read_or_none("missing", "txt"), None);
/// ```
pub struct BundleFileReader {
    base_dir: PathBuf,
}

impl BundleFileReader {
    /// Path the reader looks at for `name` and `file_type`.
    pub fn path_for(&self, name: &str, file_type: &str) -> PathBuf {
        resolve(&self.base_dir, name, file_type)
    }

    /// Reads the file, collapsing both failure kinds into `None`.
    pub fn read_or_none(&self, name: &str, file_type: &str) -> Option<String> {
        self.read(name, file_type).ok()
    }
}

impl TextReader for BundleFileReader {
    fn read(&self, name: &str, file_type: &str) -> TextReaderResult {
        let path = self.path_for(name, file_type);

        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {}
            Err(err) if err.kind() != ErrorKind::NotFound => {
                error!("Unable to read contents of file {}", path.display());
                return Err(ReportError::Unreadable {
                    path,
                    reason: err.to_string(),
                });
            }
            _ => {
                error!("Unable to find file {}", path.display());
                return Err(ReportError::NotFound { path });
            }
        }

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!("Read {} bytes from {}", contents.len(), path.display());
                Ok(contents)
            }
            Err(err) => {
                error!("Unable to read contents of file {}", path.display());
                Err(ReportError::Unreadable {
                    path,
                    reason: err.to_string(),
                })
            }
        }
    }
}

/// A builder for configuring a [`BundleFileReader`].
///
/// The base directory defaults to the current directory.
#[derive(Default)]
pub struct BundleFileReaderBuilder {
    base_dir: Option<PathBuf>,
}

impl BundleFileReaderBuilder {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Sets the directory file names are resolved against.
    pub fn base_dir<P: AsRef<Path>>(mut self, base_dir: P) -> Self {
        self.base_dir = Some(base_dir.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> BundleFileReader {
        BundleFileReader {
            base_dir: self.base_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
