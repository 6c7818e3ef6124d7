use log::info;

use crate::{
    core::{
        item::TableWriter,
        table::{Record, Titles},
    },
    error::ReportError,
};

/// Logs every record, fields in title order.
#[derive(Default)]
pub struct LoggerTableWriter {}

impl TableWriter for LoggerTableWriter {
    fn write(&self, titles: &Titles, table: &[Record]) -> Result<(), ReportError> {
        table.iter().for_each(|record| {
            let fields: Vec<(&str, &str)> = titles
                .iter()
                .filter_map(|title| record.get(title).map(|value| (title.as_str(), value.as_str())))
                .collect();
            info!("Record:{:?}", fields)
        });
        Ok(())
    }

    fn flush(&self) -> Result<(), ReportError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerTableWriter;
    use crate::core::{converter::parse, item::TableWriter};

    #[test]
    fn logger_should_accept_any_table() {
        let (titles, table) = parse("a,b\n1,2\n3,4", ",");

        let writer = LoggerTableWriter::default();

        assert!(writer.write(&titles, &table).is_ok());
        assert!(writer.flush().is_ok());
    }
}
