//! Price formatting helpers.
//!
//! Prices are stored and computed as `rust_decimal::Decimal` (never floats)
//! and only converted to strings at the template boundary. The shop trades in
//! euros; amounts are displayed with two decimal places and a trailing symbol
//! ("12.90 €").

use rust_decimal::Decimal;

/// Format a decimal amount as a euro price string.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use chaussup_core::format_eur;
///
/// assert_eq!(format_eur(Decimal::new(1290, 2)), "12.90 €");
/// ```
#[must_use]
pub fn format_eur(amount: Decimal) -> String {
    format!("{:.2} €", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur_two_places() {
        assert_eq!(format_eur(Decimal::new(1290, 2)), "12.90 €");
        assert_eq!(format_eur(Decimal::ZERO), "0.00 €");
    }

    #[test]
    fn test_format_eur_rounds() {
        // 12.905 rounds to even (banker's rounding)
        assert_eq!(format_eur(Decimal::new(12905, 3)), "12.90 €");
        assert_eq!(format_eur(Decimal::new(12906, 3)), "12.91 €");
    }

    #[test]
    fn test_format_eur_whole_number() {
        assert_eq!(format_eur(Decimal::from(25)), "25.00 €");
    }
}
