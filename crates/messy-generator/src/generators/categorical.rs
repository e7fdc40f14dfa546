//! Inconsistent categorical encoding.
//!
//! Upstream systems disagree on whether a category is stored as text or as
//! its numeric code. Each value is flipped to its code by a biased coin.

use crate::generators::biased_coin;
use messy_core::Category;
use rand::Rng;

/// Strip surrounding whitespace and double quotes.
pub fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

/// Find the code for a (possibly quoted) label.
pub fn lookup_code<'a>(value: &str, categories: &'a [Category]) -> Option<&'a str> {
    let label = unquote(value);
    categories
        .iter()
        .find(|c| c.label == label)
        .map(|c| c.code.as_str())
}

/// Re-encode `value` with probability `p`, otherwise keep its original text.
///
/// Returns `None` when the label is not part of the enumeration; this is
/// checked before the coin is drawn so unknown values always fail.
pub fn recode<R: Rng>(
    rng: &mut R,
    value: &str,
    categories: &[Category],
    p: f64,
) -> Option<String> {
    let code = lookup_code(value, categories)?;
    if biased_coin(rng, p) {
        Some(code.to_string())
    } else {
        Some(value.to_string())
    }
}
