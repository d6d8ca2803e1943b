//! KABU+ URL construction.

use chrono::NaiveDate;

/// Base URL of the KABU+ CSV WebDAV share.
pub const BASE_URL: &str = "https://secure6216m.sakura.ne.jp:9802/csvex/webdav/kabu.plus/csv";

/// Date format used in feed file names.
const DATE_FORMAT: &str = "%Y%m%d";

/// Builds the URL of the daily price file for `date`.
///
/// URL format: `{base}/japan-all-stock-prices/daily/japan-all-stock-prices_{YYYYMMDD}.csv`
///
/// The date is used as given; no timezone conversion takes place.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kabuplus_fetch::url::{BASE_URL, price_url};
///
/// let date = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
/// assert_eq!(
///     price_url(BASE_URL, date),
///     "https://secure6216m.sakura.ne.jp:9802/csvex/webdav/kabu.plus/csv/japan-all-stock-prices/daily/japan-all-stock-prices_20200110.csv"
/// );
/// ```
#[must_use]
pub fn price_url(base: &str, date: NaiveDate) -> String {
    format!(
        "{}/japan-all-stock-prices/daily/japan-all-stock-prices_{}.csv",
        base.trim_end_matches('/'),
        date.format(DATE_FORMAT)
    )
}
