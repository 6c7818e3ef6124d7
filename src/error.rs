use std::path::PathBuf;

use thiserror::Error;

use crate::core::table::RowDiagnostic;

#[derive(Error, Debug)]
/// Report error
pub enum ReportError {
    #[error("Unable to find file {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to read contents of file {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("Unable to write to {}: {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },

    #[error("TableWriter from: {0}")]
    TableWriter(String),

    #[error("{} row(s) do not match the header", .0.len())]
    MalformedRows(Vec<RowDiagnostic>),
}
