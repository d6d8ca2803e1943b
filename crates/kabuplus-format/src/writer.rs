//! KDB CSV output.

use std::io::Write;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use kabuplus_types::{KdbRow, PriceRow};
use thiserror::Error;
use tracing::debug;

use crate::to_kdb;

/// Errors that can occur while converting the feed.
#[derive(Error, Debug)]
pub enum TransformError {
    /// CSV could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row is narrower than the feed layout.
    #[error("Row on line {line} has {found} fields, expected at least {min}", min = PriceRow::MIN_FIELDS)]
    ShortRow {
        /// 1-based line of the offending record.
        line: u64,
        /// Number of fields the record had.
        found: usize,
    },

    /// I/O error while flushing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes KDB rows as CSV.
///
/// Fields are quoted only when they contain a comma, a quote or a line
/// break, and records end with `\n`. Leading whitespace does not trigger
/// quoting.
#[derive(Debug)]
pub struct KdbWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> KdbWriter<W> {
    /// Creates a writer over the given sink.
    pub fn new(writer: W) -> Self {
        let inner = WriterBuilder::new().has_headers(false).from_writer(writer);
        Self { inner }
    }

    /// Writes the fixed KDB header line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_header(&mut self) -> Result<(), TransformError> {
        self.inner.write_record(KdbRow::HEADER)?;
        self.inner.flush()?;
        Ok(())
    }

    /// Writes one row and flushes it to the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_row(&mut self, row: &KdbRow) -> Result<(), TransformError> {
        self.inner.serialize(row)?;
        self.inner.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn into_inner(self) -> Result<W, TransformError> {
        self.inner
            .into_inner()
            .map_err(|e| TransformError::Io(e.into_error()))
    }
}

/// Converts a decoded price feed into KDB CSV.
///
/// The first record is the feed header; it is dropped without inspection and
/// replaced by [`KdbRow::HEADER`]. Every following record is mapped with
/// [`to_kdb`]. Input with no records yields empty output.
///
/// # Errors
///
/// Fails on the first malformed record. A record with fewer than
/// [`PriceRow::MIN_FIELDS`] fields yields [`TransformError::ShortRow`];
/// nothing is returned for the rows converted before it.
pub fn transform_to_kdb(text: &str) -> Result<Vec<u8>, TransformError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut writer = KdbWriter::new(Vec::with_capacity(text.len()));

    let mut record = StringRecord::new();
    let mut rows = 0usize;
    let mut seen_header = false;

    while reader.read_record(&mut record)? {
        if !seen_header {
            seen_header = true;
            writer.write_header()?;
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        let row = PriceRow::from_fields(&fields).map_err(|e| TransformError::ShortRow {
            line: record.position().map_or(0, csv::Position::line),
            found: e.found,
        })?;
        writer.write_row(&to_kdb(&row))?;
        rows += 1;
    }

    let output = writer.into_inner()?;
    debug!(rows, bytes = output.len(), "converted price feed to KDB");
    Ok(output)
}
