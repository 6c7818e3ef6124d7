//! CSV export of parsed tables.
//!
//! Parsing never goes through this module: the converter splits rows on a
//! plain delimiter. Writing goes through the `csv` crate so values that
//! contain the delimiter or quotes come out properly quoted.
//!
//! # Examples
//!
//! ```
//! use csv_report_rs::core::converter::CsvTableConverter;
//! use csv_report_rs::core::item::TableWriter;
//! use csv_report_rs::item::csv::csv_writer::CsvTableWriterBuilder;
//!
//! let (titles, table) = CsvTableConverter::default().parse("name,note\nfoo,say \"hi\"\n");
//!
//! let writer = CsvTableWriterBuilder::new().from_writer(vec![]);
//! writer.write(&titles, &table).unwrap();
//!
//! let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert_eq!(output, "name,note\nfoo,\"say \"\"hi\"\"\"\n");
//! ```

pub mod csv_writer;
