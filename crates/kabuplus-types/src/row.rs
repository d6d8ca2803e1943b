//! Source and target row layouts.

use serde::Serialize;

use crate::RowWidthError;

/// A row of the `japan-all-stock-prices` feed, borrowed from a parsed record.
///
/// The feed is addressed positionally. Only the columns used by the KDB
/// conversion are kept; the rest (fields 3-4 and 6-8) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRow<'a> {
    /// Security code, e.g. `1301`.
    pub code: &'a str,
    /// Security name.
    pub name: &'a str,
    /// Market segment label.
    pub market: &'a str,
    /// Closing price.
    pub close: &'a str,
    /// Opening price.
    pub open: &'a str,
    /// Day high.
    pub high: &'a str,
    /// Day low.
    pub low: &'a str,
    /// Traded volume.
    pub volume: &'a str,
    /// Turnover in thousands of yen, or `-` when there was no trading.
    pub turnover: &'a str,
}

impl<'a> PriceRow<'a> {
    /// Minimum number of fields a feed row must carry.
    pub const MIN_FIELDS: usize = 14;

    /// Builds a row from positional fields.
    ///
    /// # Errors
    ///
    /// Returns [`RowWidthError`] if fewer than [`Self::MIN_FIELDS`] fields are given.
    pub fn from_fields(fields: &[&'a str]) -> Result<Self, RowWidthError> {
        if fields.len() < Self::MIN_FIELDS {
            return Err(RowWidthError {
                found: fields.len(),
            });
        }

        Ok(Self {
            code: fields[0],
            name: fields[1],
            market: fields[2],
            close: fields[5],
            open: fields[9],
            high: fields[10],
            low: fields[11],
            volume: fields[12],
            turnover: fields[13],
        })
    }
}

/// A row of the 9-column KDB schema.
///
/// Field order matches [`KdbRow::HEADER`] and is the order used when the row
/// is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KdbRow {
    /// Security code with exchange suffix, e.g. `1301-T`.
    pub code: String,
    /// Security name.
    pub name: String,
    /// Market segment in KDB notation.
    pub market: String,
    /// Opening price.
    pub open: String,
    /// Day high.
    pub high: String,
    /// Day low.
    pub low: String,
    /// Closing price.
    pub close: String,
    /// Traded volume.
    pub volume: String,
    /// Turnover in yen, or `-`.
    pub turnover: String,
}

impl KdbRow {
    /// Column names written as the first line of KDB output.
    pub const HEADER: [&'static str; 9] = [
        "コード",
        "銘柄名",
        "市場",
        "始値",
        "高値",
        "安値",
        "終値",
        "出来高",
        "売買代金",
    ];
}
