use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, error};
use tempfile::NamedTempFile;

use crate::{core::item::TextWriter, error::ReportError};

use super::resolve;

/// Writes text files into a base directory without ever leaving a
/// half-written destination behind.
///
/// The text goes to a temporary file created next to the destination, which
/// is synced and then renamed over it. If any step fails the destination
/// keeps its previous content and [`ReportError::WriteFailure`] is returned.
/// Nothing is retried.
pub struct AtomicFileWriter {
    base_dir: PathBuf,
}

impl AtomicFileWriter {
    /// Path the writer replaces for `name` and `file_type`.
    pub fn path_for(&self, name: &str, file_type: &str) -> PathBuf {
        resolve(&self.base_dir, name, file_type)
    }
}

impl TextWriter for AtomicFileWriter {
    fn write(&self, name: &str, file_type: &str, text: &str) -> Result<(), ReportError> {
        let path = self.path_for(name, file_type);

        match write_atomically(&path, text) {
            Ok(()) => {
                debug!("Wrote {} bytes to {}", text.len(), path.display());
                Ok(())
            }
            Err(err) => {
                error!("Unable to write to {}: {}", path.display(), err);
                Err(ReportError::WriteFailure {
                    path,
                    reason: err.to_string(),
                })
            }
        }
    }
}

fn write_atomically(path: &Path, text: &str) -> io::Result<()> {
    // The temporary file must live on the destination's filesystem for the
    // final rename to be atomic.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(text.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|err| err.error)?;

    Ok(())
}

/// A builder for configuring an [`AtomicFileWriter`].
///
/// The base directory defaults to the current directory.
#[derive(Default)]
pub struct AtomicFileWriterBuilder {
    base_dir: Option<PathBuf>,
}

impl AtomicFileWriterBuilder {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    pub fn base_dir<P: AsRef<Path>>(mut self, base_dir: P) -> Self {
        self.base_dir = Some(base_dir.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> AtomicFileWriter {
        AtomicFileWriter {
            base_dir: self.base_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
