//! # Report Session
//!
//! A headless stand-in for a single text view with four actions wired to it:
//! **load** the backing file into the buffer, **save** the buffer back,
//! turn the buffer into a **report**, and **reset** it to a placeholder.
//!
//! The buffer is owned by the session and handed explicitly to the pure
//! converter functions; file access goes through the [`TextReader`] and
//! [`TextWriter`] seams.
//!
//! ## Examples
//!
//! ```
//! use csv_report_rs::item::file::{
//!     file_reader::BundleFileReaderBuilder, file_writer::AtomicFileWriterBuilder,
//! };
//! use csv_report_rs::session::ReportSessionBuilder;
//!
//! # fn example() -> Result<(), csv_report_rs::ReportError> {
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("data.txt"), "name,qty\r\nfoo,1\r\nbar,2\r\n").unwrap();
//!
//! let mut session = ReportSessionBuilder::new(
//!     BundleFileReaderBuilder::new().base_dir(dir.path()).build(),
//!     AtomicFileWriterBuilder::new().base_dir(dir.path()).build(),
//! )
//! .build();
//!
//! session.load()?;
//! let skipped = session.report();
//! assert_eq!(skipped, 0);
//! assert_eq!(session.text(), "foo     1     \nbar     2     \n");
//!
//! session.reset();
//! assert_eq!(session.text(), "Nope, no pizza here.");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::{debug, info};

use crate::{
    core::{
        converter::CsvTableConverter,
        item::{TextReader, TextWriter},
    },
    error::ReportError,
    item::file::DEFAULT_FILE_TYPE,
};

/// Logical name of the backing file.
pub const DEFAULT_FILE_NAME: &str = "data";

/// Text shown after a reset.
pub const DEFAULT_PLACEHOLDER: &str = "Nope, no pizza here.";

pub struct ReportSession<R, W> {
    reader: R,
    writer: W,
    converter: CsvTableConverter,
    file_name: String,
    file_type: String,
    placeholder: String,
    text: String,
}

impl<R: TextReader, W: TextWriter> ReportSession<R, W> {
    /// Current content of the buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer, as a user editing the view would.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Loads the backing file into the buffer.
    ///
    /// # Errors
    ///
    /// Returns the reader's [`ReportError::NotFound`] or
    /// [`ReportError::Unreadable`]; the buffer is left empty in that case.
    pub fn load(&mut self) -> Result<(), ReportError> {
        match self.reader.read(&self.file_name, &self.file_type) {
            Ok(contents) => {
                self.text = contents;
                Ok(())
            }
            Err(err) => {
                self.text.clear();
                Err(err)
            }
        }
    }

    /// Saves the buffer to the backing file.
    ///
    /// # Errors
    ///
    /// Returns the writer's [`ReportError::WriteFailure`] unchanged.
    pub fn save(&self) -> Result<(), ReportError> {
        self.writer
            .write(&self.file_name, &self.file_type, &self.text)?;
        info!("{}.{} written", self.file_name, self.file_type);
        Ok(())
    }

    /// Parses the buffer and replaces it with the rendered report.
    ///
    /// Returns how many rows were left out because their field count did not
    /// match the header.
    pub fn report(&mut self) -> usize {
        let parsed = self.converter.parse_with_diagnostics(&self.text);
        debug!(
            "Parsed {} record(s), skipped {}",
            parsed.table.len(),
            parsed.skipped_count()
        );

        self.text = self.converter.render(&parsed.titles, &parsed.table);
        parsed.skipped_count()
    }

    /// Puts the placeholder text into the buffer.
    pub fn reset(&mut self) {
        self.text = self.placeholder.clone();
    }
}

/// A builder for configuring a [`ReportSession`].
///
/// # Default Configuration
///
/// - File name: `"data"`
/// - File type: `"txt"`
/// - Placeholder: `"Nope, no pizza here."`
/// - Converter: [`CsvTableConverter::default`]
/// - Initial text: empty
pub struct ReportSessionBuilder<R, W> {
    reader: R,
    writer: W,
    converter: CsvTableConverter,
    file_name: String,
    file_type: String,
    placeholder: String,
    text: String,
}

impl<R: TextReader, W: TextWriter> ReportSessionBuilder<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            converter: CsvTableConverter::default(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            file_type: DEFAULT_FILE_TYPE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            text: String::new(),
        }
    }

    pub fn converter(mut self, converter: CsvTableConverter) -> Self {
        self.converter = converter;
        self
    }

    pub fn file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn file_type(mut self, file_type: &str) -> Self {
        self.file_type = file_type.to_string();
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn build(self) -> ReportSession<R, W> {
        ReportSession {
            reader: self.reader,
            writer: self.writer,
            converter: self.converter,
            file_name: self.file_name,
            file_type: self.file_type,
            placeholder: self.placeholder,
            text: self.text,
        }
    }
}
