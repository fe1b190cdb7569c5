//! Value and hash formatting helpers.
//!
//! The ledger accounts in its smallest unit (10^18 per display unit);
//! history views present the display unit as a decimal string.

use crate::entities::{Hash, U256};

/// Number of smallest-unit decimals per display unit.
const DISPLAY_UNIT_DECIMALS: usize = 18;

/// Convert a smallest-unit value to its display-unit decimal string.
///
/// Always carries at least one fractional digit, so a whole value of 3
/// renders as `"3.0"` and zero as `"0.0"`. Trailing zeros beyond the
/// first fractional digit are trimmed.
pub fn format_display_units(value: U256) -> String {
    let base = U256::exp10(DISPLAY_UNIT_DECIMALS);
    let whole = value / base;
    let frac = value % base;

    if frac.is_zero() {
        return format!("{whole}.0");
    }

    let mut frac_digits = format!("{frac:0>width$}", width = DISPLAY_UNIT_DECIMALS);
    while frac_digits.len() > 1 && frac_digits.ends_with('0') {
        frac_digits.pop();
    }
    format!("{whole}.{frac_digits}")
}

/// Abbreviated hex rendering of a hash for logs (first 8 bytes).
pub fn short_hash(hash: &Hash) -> String {
    format!("0x{}", hex::encode(&hash[..8]))
}
