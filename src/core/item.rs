use crate::{
    core::table::{Record, Titles},
    error::ReportError,
};

/// Result of reading a whole text file.
pub type TextReaderResult = Result<String, ReportError>;

/// Source of raw text, looked up by logical file name and type.
pub trait TextReader {
    fn read(&self, name: &str, file_type: &str) -> TextReaderResult;
}

/// Destination for text, addressed the same way a [`TextReader`] is.
pub trait TextWriter {
    fn write(&self, name: &str, file_type: &str, text: &str) -> Result<(), ReportError>;
}

/// Sink for a parsed table.
pub trait TableWriter {
    fn write(&self, titles: &Titles, table: &[Record]) -> Result<(), ReportError>;
    fn flush(&self) -> Result<(), ReportError>;
    fn open(&self) -> Result<(), ReportError> {
        Ok(())
    }
    fn close(&self) -> Result<(), ReportError> {
        Ok(())
    }
}
