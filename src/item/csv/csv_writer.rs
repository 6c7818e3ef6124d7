use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{self, Write},
    path::Path,
    result,
};

use csv::{Writer, WriterBuilder};

use crate::{
    core::{
        item::TableWriter,
        table::{Record, RowDiagnostic, Titles},
    },
    error::ReportError,
};

/// Writes tables back out as CSV.
///
/// Columns follow the order of the titles; a title missing from a record is
/// written as an empty field.
pub struct CsvTableWriter<T: Write> {
    wrapper: RefCell<Writer<T>>,
    has_headers: bool,
    header_written: Cell<bool>,
}

impl<T: Write> TableWriter for CsvTableWriter<T> {
    fn write(&self, titles: &Titles, table: &[Record]) -> Result<(), ReportError> {
        let mut wtr = self.wrapper.borrow_mut();

        if self.has_headers && !self.header_written.get() {
            wtr.write_record(titles)
                .map_err(|error| ReportError::TableWriter(error.to_string()))?;
            self.header_written.set(true);
        }

        for record in table {
            let row = titles
                .iter()
                .map(|title| record.get(title).map(String::as_str).unwrap_or(""));
            wtr.write_record(row)
                .map_err(|error| ReportError::TableWriter(error.to_string()))?;
        }

        Ok(())
    }

    /// Flush the contents of the internal buffer to the underlying writer.
    ///
    /// Note that this also flushes the underlying writer.
    fn flush(&self) -> Result<(), ReportError> {
        let result = self.wrapper.borrow_mut().flush();
        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(ReportError::TableWriter(error.to_string())),
        }
    }
}

impl<T: Write> CsvTableWriter<T> {
    pub fn into_inner(self) -> result::Result<T, ReportError> {
        let result = self.wrapper.into_inner().into_inner();
        match result {
            Ok(inner) => Ok(inner),
            Err(error) => Err(ReportError::TableWriter(error.to_string())),
        }
    }
}

pub struct CsvTableWriterBuilder {
    delimiter: u8,
    has_headers: bool,
}

impl Default for CsvTableWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvTableWriterBuilder {
    pub fn new() -> CsvTableWriterBuilder {
        CsvTableWriterBuilder {
            delimiter: b',',
            has_headers: true,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> CsvTableWriterBuilder {
        self.delimiter = delimiter;
        self
    }

    /// Whether the titles are written as the first row (default: true).
    pub fn has_headers(mut self, yes: bool) -> CsvTableWriterBuilder {
        self.has_headers = yes;
        self
    }

    pub fn from_path<R: AsRef<Path>>(self, path: R) -> Result<CsvTableWriter<File>, ReportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|error| ReportError::WriteFailure {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

        Ok(self.from_writer(file))
    }

    /// Builds a writer around any `io::Write`.
    ///
    /// ```
    /// # use std::error::Error;
    /// # use std::collections::HashMap;
    /// # use csv_report_rs::{core::item::TableWriter, item::csv::csv_writer::CsvTableWriterBuilder};
    /// # fn main() { example().unwrap(); }
    /// fn example() -> Result<(), Box<dyn Error>> {
    ///     let titles = vec!["city".to_string(), "country".to_string()];
    ///     let record: HashMap<String, String> = [
    ///         ("city".to_string(), "Boston".to_string()),
    ///         ("country".to_string(), "United States".to_string()),
    ///     ]
    ///     .into_iter()
    ///     .collect();
    ///
    ///     let wtr = CsvTableWriterBuilder::new().from_writer(vec![]);
    ///     wtr.write(&titles, &[record])?;
    ///
    ///     let data = String::from_utf8(wtr.into_inner()?)?;
    ///     assert_eq!(data, "city,country\nBoston,United States\n");
    ///     Ok(())
    /// }
    /// ```
    pub fn from_writer<W: io::Write>(self, wtr: W) -> CsvTableWriter<W> {
        let wtr = WriterBuilder::new()
            .flexible(false)
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(wtr);

        CsvTableWriter {
            wrapper: RefCell::new(wtr),
            has_headers: self.has_headers,
            header_written: Cell::new(false),
        }
    }
}

/// Writes skipped-row diagnostics as CSV, one row per diagnostic with a
/// `line,expected,found` header.
pub fn write_diagnostics<W: io::Write>(
    wtr: W,
    diagnostics: &[RowDiagnostic],
) -> Result<W, ReportError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(wtr);

    wtr.write_record(["line", "expected", "found"])
        .map_err(|error| ReportError::TableWriter(error.to_string()))?;

    for diagnostic in diagnostics {
        wtr.serialize(diagnostic)
            .map_err(|error| ReportError::TableWriter(error.to_string()))?;
    }

    wtr.into_inner()
        .map_err(|error| ReportError::TableWriter(error.to_string()))
}
