//! Mock versions of the text reader and writer seams.
use mockall::mock;

use csv_report_rs::{
    core::item::{TextReader, TextReaderResult, TextWriter},
    error::ReportError,
};

mock! {
    pub Reader {}
    impl TextReader for Reader {
        fn read(&self, name: &str, file_type: &str) -> TextReaderResult;
    }
}

mock! {
    pub Writer {}
    impl TextWriter for Writer {
        fn write(&self, name: &str, file_type: &str, text: &str) -> Result<(), ReportError>;
    }
}
