//! Market segment labels.

use std::borrow::Cow;

/// Feed market labels and their KDB spelling.
///
/// No source label is a prefix of another, so the order only matters for
/// readability.
pub const MARKET_LABELS: [(&str, &str); 6] = [
    ("一部", "1部"),
    ("二部", "2部"),
    ("JQG", "JQグロース"),
    ("JQS", "JQスタンダード"),
    ("福証QB", "福証Q-Board"),
    ("アンビシャス", "アンビ"),
];

/// Rewrites every known label inside a market field.
///
/// The text is scanned once from left to right; replaced text is never
/// rescanned. Anything that is not a known label is copied as is, so
/// `東証一部` becomes `東証1部`.
#[must_use]
pub fn replace_market(market: &str) -> Cow<'_, str> {
    if !MARKET_LABELS.iter().any(|(from, _)| market.contains(from)) {
        return Cow::Borrowed(market);
    }

    let mut out = String::with_capacity(market.len() + 16);
    let mut rest = market;

    'scan: while let Some(ch) = rest.chars().next() {
        for (from, to) in MARKET_LABELS {
            if let Some(tail) = rest.strip_prefix(from) {
                out.push_str(to);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    Cow::Owned(out)
}
