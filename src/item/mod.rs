/// This module provides the reader and atomic writer for text files in a base directory.
pub mod file;

#[cfg(feature = "csv")]
/// This module provides a CSV table writer.
pub mod csv;

#[cfg(feature = "logger")]
/// This module provides a logger table writer.
pub mod logger;
