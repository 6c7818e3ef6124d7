use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

/// Ordered column names taken from the header line.
pub type Titles = Vec<String>;

/// One data row, keyed by column name.
pub type Record = HashMap<String, String>;

/// Records in the order their rows appear in the source text.
pub type Table = Vec<Record>;

/// A row that was left out of the table because its field count
/// differs from the header's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDiagnostic {
    /// 1-based position in the normalized line sequence
    pub line: usize,
    /// Number of titles
    pub expected: usize,
    /// Number of fields found on the row
    pub found: usize,
}

impl RowDiagnostic {
    pub fn reason(&self) -> String {
        format!(
            "expected {} field(s) but found {}",
            self.expected, self.found
        )
    }
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason())
    }
}

/// Outcome of a parse that keeps track of the rows it dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedTable {
    pub titles: Titles,
    pub table: Table,
    pub skipped: Vec<RowDiagnostic>,
}

impl ParsedTable {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Drops the diagnostics and keeps the titles and records.
    pub fn into_parts(self) -> (Titles, Table) {
        (self.titles, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_should_describe_the_mismatch() {
        let diagnostic = RowDiagnostic {
            line: 4,
            expected: 2,
            found: 3,
        };

        assert_eq!(diagnostic.reason(), "expected 2 field(s) but found 3");
        assert_eq!(
            diagnostic.to_string(),
            "line 4: expected 2 field(s) but found 3"
        );
    }
}
