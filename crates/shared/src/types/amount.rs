//! Helpers for pre-tax amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are plain `rust_decimal::Decimal` values, currency-agnostic.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits used when presenting an amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Rounds an amount to [`AMOUNT_SCALE`] digits, half away from zero.
///
/// Only meant for presentation: accumulation always happens on the
/// unrounded values.
#[must_use]
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly [`AMOUNT_SCALE`] fractional digits.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_amount(amount);
    rounded.rescale(AMOUNT_SCALE);
    rounded.to_string()
}
