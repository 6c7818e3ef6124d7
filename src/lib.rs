#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # csv-report-rs

 Turns header-first CSV text into a table of records and renders that table
 back as a padded-column report.

 ## Core Concepts

- **Titles:** the ordered column names taken from the first non-empty line.
- **Record:** one data row, as a map from column name to field value.
- **Table:** the records in the order their rows appear in the text.
- **CsvTableConverter:** normalizes line endings, splits rows on a plain
  delimiter (no quoting, no escaping), drops rows whose field count differs
  from the header's and renders tables with five spaces after each field.
- **TextReader / TextWriter:** the seams to whatever stores the text. The
  crate ships a reader for `<name>.<type>` files in a base directory and an
  atomic writer for the same location.
- **ReportSession:** a text buffer with load, save, report and reset actions.

 ## Features

| **Feature**   | **Description**                                      |
|---------------|------------------------------------------------------|
| csv           | Enables the CSV `TableWriter`                        |
| logger        | Enables a logger `TableWriter`, useful for debugging |
| full          | Enables all available features                       |

 ## Getting Started

```rust
use csv_report_rs::core::converter::{parse, render};

let (titles, table) = parse("a,b\r\n1,2\r\n3,4\r\n5,6,7", ",");

assert_eq!(titles, vec!["a", "b"]);
assert_eq!(table.len(), 2);
assert_eq!(render(&titles, &table), "1     2     \n3     4     \n");
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core module: data model, converter and reader/writer seams
pub mod core;

/// Error types for reading, parsing and writing
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of readers / writers (for example: file reader and csv table writer)
pub mod item;

/// Text buffer with load, save, report and reset actions
pub mod session;
