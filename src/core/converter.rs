use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    core::table::{ParsedTable, Record, RowDiagnostic, Table, Titles},
    error::ReportError,
};

/// Trailing padding appended to every rendered field.
const PADDING: &str = "     ";

/// How blank lines left by line-ending normalization are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlankLines {
    /// One non-recursive `"\n\n" -> "\n"` pass: `"\n\n\n"` becomes `"\n\n"`.
    #[default]
    SinglePass,
    /// Repeat the replacement until no two consecutive newlines remain.
    Collapse,
}

/// Converts raw header-first CSV text into a table of records and renders
/// tables back into a padded-column report.
///
/// Fields are split on a plain delimiter string: there is no quoting and no
/// escaping, so a delimiter inside a value always starts a new field. Rows
/// whose field count differs from the header's are dropped whole.
///
/// # Examples
///
/// ```
/// use csv_report_rs::core::converter::CsvTableConverterBuilder;
///
/// let converter = CsvTableConverterBuilder::new().delimiter(",").build();
///
/// let (titles, table) = converter.parse("name,qty\r\nfoo,1\r\nbar,2\r\nbroken");
///
/// assert_eq!(titles, vec!["name", "qty"]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[0]["name"], "foo");
/// assert_eq!(table[1]["qty"], "2");
///
/// let report = converter.render(&titles, &table);
/// assert_eq!(report, "foo     1     \nbar     2     \n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvTableConverter {
    delimiter: String,
    blank_lines: BlankLines,
    header_as_record: bool,
}

impl Default for CsvTableConverter {
    fn default() -> Self {
        CsvTableConverterBuilder::new().build()
    }
}

impl CsvTableConverter {
    /// Turns every `\r` into `\n`, then collapses blank lines according to
    /// the configured [`BlankLines`] mode.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = raw.replace('\r', "\n");

        match self.blank_lines {
            BlankLines::SinglePass => text = text.replace("\n\n", "\n"),
            BlankLines::Collapse => {
                while text.contains("\n\n") {
                    text = text.replace("\n\n", "\n");
                }
            }
        }

        text
    }

    /// Splits a row on the configured delimiter.
    pub fn split_fields(&self, row: &str) -> Vec<String> {
        split_fields(row, &self.delimiter)
    }

    /// Parses raw text into its titles and records.
    ///
    /// Malformed rows are dropped silently; use
    /// [`parse_with_diagnostics`](Self::parse_with_diagnostics) to find out
    /// which ones.
    pub fn parse(&self, raw: &str) -> (Titles, Table) {
        self.parse_with_diagnostics(raw).into_parts()
    }

    /// Parses raw text and reports every row left out of the table.
    pub fn parse_with_diagnostics(&self, raw: &str) -> ParsedTable {
        let normalized = self.normalize(raw);

        // Line numbers count the empty lines a single pass may leave behind.
        let mut lines = normalized
            .split('\n')
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| (index + 1, line));

        let Some((_, header)) = lines.next() else {
            debug!("No data in text");
            return ParsedTable::default();
        };

        let titles = self.split_fields(header);
        let mut table = Table::new();
        let mut skipped = Vec::new();

        if self.header_as_record {
            table.push(to_record(&titles, titles.clone()));
        }

        for (line, row) in lines {
            let fields = self.split_fields(row);

            if fields.len() != titles.len() {
                let diagnostic = RowDiagnostic {
                    line,
                    expected: titles.len(),
                    found: fields.len(),
                };
                debug!("Skipping row, {}", diagnostic);
                skipped.push(diagnostic);
                continue;
            }

            table.push(to_record(&titles, fields));
        }

        ParsedTable {
            titles,
            table,
            skipped,
        }
    }

    /// Parses raw text and fails if any row had to be dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MalformedRows`] carrying every diagnostic when
    /// at least one row does not match the header.
    pub fn parse_strict(&self, raw: &str) -> Result<ParsedTable, ReportError> {
        let parsed = self.parse_with_diagnostics(raw);

        if parsed.skipped.is_empty() {
            Ok(parsed)
        } else {
            Err(ReportError::MalformedRows(parsed.skipped))
        }
    }

    /// Renders a table as a padded-column report. See [`render`].
    pub fn render(&self, titles: &[String], table: &[Record]) -> String {
        render(titles, table)
    }

    /// Parses raw text and renders it straight back as a report.
    pub fn report(&self, raw: &str) -> String {
        let (titles, table) = self.parse(raw);
        render(&titles, &table)
    }
}

/// A builder for configuring a [`CsvTableConverter`].
///
/// # Default Configuration
///
/// - Delimiter: comma (`","`)
/// - Blank lines: [`BlankLines::SinglePass`]
/// - Header as record: disabled
#[derive(Debug, Clone)]
pub struct CsvTableConverterBuilder {
    delimiter: String,
    blank_lines: BlankLines,
    header_as_record: bool,
}

impl Default for CsvTableConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvTableConverterBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: ",".to_string(),
            blank_lines: BlankLines::default(),
            header_as_record: false,
        }
    }

    /// Sets the string separating fields within a row.
    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    pub fn blank_lines(mut self, blank_lines: BlankLines) -> Self {
        self.blank_lines = blank_lines;
        self
    }

    /// When enabled, the header line is also emitted as the first record,
    /// mapping every title to itself.
    pub fn header_as_record(mut self, yes: bool) -> Self {
        self.header_as_record = yes;
        self
    }

    pub fn build(self) -> CsvTableConverter {
        CsvTableConverter {
            delimiter: self.delimiter,
            blank_lines: self.blank_lines,
            header_as_record: self.header_as_record,
        }
    }
}

fn to_record(titles: &[String], fields: Vec<String>) -> Record {
    titles.iter().cloned().zip(fields).collect()
}

/// Normalizes line endings with the default single-pass blank-line collapse.
pub fn normalize(raw: &str) -> String {
    CsvTableConverter::default().normalize(raw)
}

/// Parses raw text with the given delimiter and default settings.
pub fn parse(raw: &str, delimiter: &str) -> (Titles, Table) {
    CsvTableConverterBuilder::new()
        .delimiter(delimiter)
        .build()
        .parse(raw)
}

/// Splits a row on `delimiter` without trimming or unescaping anything.
///
/// An empty delimiter leaves the row whole.
pub fn split_fields(row: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![row.to_string()];
    }
    row.split(delimiter).map(str::to_string).collect()
}

/// Renders records in order, each field followed by five spaces and each
/// record terminated by a newline.
///
/// A title missing from a record is a logic error upstream: it is logged and
/// the field is skipped, the rest of the row is still rendered.
pub fn render(titles: &[String], table: &[Record]) -> String {
    let mut report = String::new();

    for record in table {
        for title in titles {
            match record.get(title) {
                Some(field) => {
                    report.push_str(field);
                    report.push_str(PADDING);
                }
                None => warn!("Field not found: {}, skipping field", title),
            }
        }
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn titles(names: &[&str]) -> Titles {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn normalize_should_turn_carriage_returns_into_newlines() {
        assert_eq!(normalize("a\rb\r\nc"), "a\nb\nc");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn single_pass_should_only_partially_collapse_long_runs() {
        assert_eq!(normalize("a\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn collapse_should_remove_every_blank_line() {
        let converter = CsvTableConverterBuilder::new()
            .blank_lines(BlankLines::Collapse)
            .build();

        assert_eq!(converter.normalize("a\n\n\nb"), "a\nb");
        assert_eq!(converter.normalize("a\r\n\r\n\r\nb\n"), "a\nb\n");
    }

    #[test]
    fn empty_text_should_give_empty_table() {
        let (titles, table) = parse("", ",");

        assert!(titles.is_empty());
        assert!(table.is_empty());

        let (titles, table) = parse("\r\n\n\n", ",");
        assert!(titles.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn parse_should_map_fields_to_titles() {
        let (titles, table) = parse("a,b\n1,2\n3,4", ",");

        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(
            table,
            vec![record(&[("a", "1"), ("b", "2")]), record(&[("a", "3"), ("b", "4")])]
        );
    }

    #[test]
    fn parse_should_drop_rows_with_wrong_field_count() {
        let converter = CsvTableConverter::default();

        let parsed = converter.parse_with_diagnostics("a,b\n1,2\n3,4\n5,6,7\n8");

        assert_eq!(parsed.table.len(), 2);
        assert_eq!(parsed.skipped_count(), 2);
        assert_eq!(
            parsed.skipped[0],
            RowDiagnostic {
                line: 4,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(parsed.skipped[1].line, 5);
    }

    #[test]
    fn parse_should_keep_fields_untrimmed() {
        let (titles, table) = parse(" a , b\n 1,\n", ",");

        assert_eq!(titles, vec![" a ", " b"]);
        assert_eq!(table, vec![record(&[(" a ", " 1"), (" b", "")])]);
    }

    #[test]
    fn parse_should_skip_blank_lines_left_by_single_pass() {
        let parsed = CsvTableConverter::default().parse_with_diagnostics("a,b\n\n\n1,2");

        assert_eq!(parsed.table, vec![record(&[("a", "1"), ("b", "2")])]);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn header_as_record_should_reproduce_header_duplication() {
        let converter = CsvTableConverterBuilder::new()
            .header_as_record(true)
            .build();

        let (_, table) = converter.parse("a,b\n1,2");

        assert_eq!(
            table,
            vec![record(&[("a", "a"), ("b", "b")]), record(&[("a", "1"), ("b", "2")])]
        );
    }

    #[test]
    fn parse_should_use_custom_delimiter() {
        let converter = CsvTableConverterBuilder::new().delimiter("; ").build();

        let (titles, table) = converter.parse("x; y\n1; 2,5");

        assert_eq!(titles, vec!["x", "y"]);
        assert_eq!(table, vec![record(&[("x", "1"), ("y", "2,5")])]);
    }

    #[test]
    fn parse_strict_should_fail_on_malformed_rows() {
        let converter = CsvTableConverter::default();

        match converter.parse_strict("a,b\n1,2\n3") {
            Err(ReportError::MalformedRows(rows)) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].line, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let parsed = converter.parse_strict("a,b\n1,2").unwrap();
        assert_eq!(parsed.table.len(), 1);
    }

    #[test]
    fn split_fields_should_not_trim_or_unescape() {
        assert_eq!(split_fields("\"a,b\",c", ","), vec!["\"a", "b\"", "c"]);
        assert_eq!(split_fields(",,", ","), vec!["", "", ""]);
        assert_eq!(split_fields("a,b", ""), vec!["a,b"]);
    }

    #[test]
    fn render_should_pad_every_field() {
        let report = render(&titles(&["a", "b"]), &[record(&[("a", "1"), ("b", "2")])]);

        assert_eq!(report, "1     2     \n");
    }

    #[test]
    fn render_of_empty_table_should_be_empty() {
        assert_eq!(render(&titles(&["a", "b"]), &[]), "");
    }

    #[test]
    fn render_should_skip_missing_fields_and_keep_the_row() {
        let table = vec![record(&[("a", "1")]), record(&[("a", "3"), ("b", "4")])];

        let report = render(&titles(&["a", "b"]), &table);

        assert_eq!(report, "1     \n3     4     \n");
    }

    #[test]
    fn report_should_parse_then_render() {
        let converter = CsvTableConverter::default();

        assert_eq!(
            converter.report("name,city\r\nAda,London\r\nAlan,Wilmslow\r\n"),
            "Ada     London     \nAlan     Wilmslow     \n"
        );
    }
}
