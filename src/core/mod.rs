/// Conversion between raw CSV text, tables and padded reports.
pub mod converter;

/// Reader and writer seams around the converter.
pub mod item;

pub mod table;
