//! Row mapping from the price feed to the KDB schema.

use std::borrow::Cow;

use kabuplus_types::{KdbRow, PriceRow};

use crate::replace_market;

/// Exchange suffix appended to security codes.
const TOKYO_SUFFIX: &str = "-T";

/// Placeholder the feed uses for a missing value.
const NO_VALUE: &str = "-";

/// Rescales a turnover figure from thousands of yen to yen.
///
/// The digits are extended textually so large values keep their exact
/// representation. The `-` placeholder is returned unchanged.
#[must_use]
pub fn thousand_yen(turnover: &str) -> Cow<'_, str> {
    if turnover == NO_VALUE {
        Cow::Borrowed(turnover)
    } else {
        Cow::Owned(format!("{turnover}000"))
    }
}

/// Maps a feed row to a KDB row.
#[must_use]
pub fn to_kdb(row: &PriceRow<'_>) -> KdbRow {
    KdbRow {
        code: format!("{}{TOKYO_SUFFIX}", row.code),
        name: row.name.to_string(),
        market: replace_market(row.market).into_owned(),
        open: row.open.to_string(),
        high: row.high.to_string(),
        low: row.low.to_string(),
        close: row.close.to_string(),
        volume: row.volume.to_string(),
        turnover: thousand_yen(row.turnover).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row(market: &'static str, turnover: &'static str) -> PriceRow<'static> {
        PriceRow {
            code: "1301",
            name: "極洋",
            market,
            close: "2905",
            open: "2880",
            high: "2910",
            low: "2875",
            volume: "12300",
            turnover,
        }
    }

    #[test]
    fn test_thousand_yen() {
        assert_eq!(thousand_yen("1234"), "1234000");
        assert_eq!(thousand_yen("0"), "0000");
        assert_eq!(thousand_yen("-"), "-");
    }

    #[test]
    fn test_thousand_yen_no_overflow() {
        assert_eq!(
            thousand_yen("98765432109876543210"),
            "98765432109876543210000"
        );
    }

    #[test]
    fn test_to_kdb_mapping() {
        let kdb = to_kdb(&create_test_row("一部", "1234"));

        assert_eq!(kdb.code, "1301-T");
        assert_eq!(kdb.name, "極洋");
        assert_eq!(kdb.market, "1部");
        assert_eq!(kdb.open, "2880");
        assert_eq!(kdb.high, "2910");
        assert_eq!(kdb.low, "2875");
        assert_eq!(kdb.close, "2905");
        assert_eq!(kdb.volume, "12300");
        assert_eq!(kdb.turnover, "1234000");
    }

    #[test]
    fn test_to_kdb_placeholder_turnover() {
        let kdb = to_kdb(&create_test_row("アンビシャス", "-"));
        assert_eq!(kdb.market, "アンビ");
        assert_eq!(kdb.turnover, "-");
    }
}
