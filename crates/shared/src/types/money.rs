//! Money formatting with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are carried as `rust_decimal::Decimal` end to end and serialized
//! to JSON as strings so currency values survive the round trip exactly.

use rust_decimal::Decimal;

/// Formats a monetary amount as a string with two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Formats an optional monetary amount, treating `None` as zero.
#[must_use]
pub fn format_amount_or_zero(amount: Option<Decimal>) -> String {
    format_amount(amount.unwrap_or_default())
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
