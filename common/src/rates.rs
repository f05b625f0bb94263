//! Rate quote and conversion result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from currency code to human-readable display name.
///
/// Refreshed as a whole from the origin provider; never partially updated.
pub type Directory = HashMap<String, String>;

/// A point-in-time exchange rate quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Source currency code, exactly as supplied by the caller.
    pub from: String,
    /// Target currency code, exactly as supplied by the caller.
    pub to: String,
    /// Units of the target currency one unit of the source currency buys.
    pub rate: f64,
    /// Instant the quote was served. Cached values carry no fetch
    /// timestamp, so this is always wall-clock now.
    pub timestamp: DateTime<Utc>,
}

impl RateQuote {
    /// Create a quote served at the current instant.
    pub fn now(from: impl Into<String>, to: impl Into<String>, rate: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rate,
            timestamp: Utc::now(),
        }
    }
}

/// Result of converting an amount between two currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Amount as supplied by the caller. Negative and zero amounts are
    /// accepted and pass through the multiplication unchanged.
    pub amount: f64,
    /// Rate the conversion was priced at.
    pub rate: f64,
    /// `amount * rate`, plain IEEE multiplication, no rounding.
    pub converted: f64,
}

impl Conversion {
    /// Price `amount` at the rate carried by `quote`.
    pub fn price(quote: &RateQuote, amount: f64) -> Self {
        Self {
            from: quote.from.clone(),
            to: quote.to.clone(),
            amount,
            rate: quote.rate,
            converted: amount * quote.rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_price_multiplies() {
        let quote = RateQuote::now("USD", "EUR", 1.08);
        let conversion = Conversion::price(&quote, 100.0);

        assert_eq!(conversion.rate, 1.08);
        assert_eq!(conversion.converted, 100.0 * 1.08);
    }

    #[test]
    fn test_price_passes_negative_amounts_through() {
        let quote = RateQuote::now("USD", "EUR", 1.08);
        let conversion = Conversion::price(&quote, -50.0);

        assert_eq!(conversion.amount, -50.0);
        assert_eq!(conversion.converted, -50.0 * 1.08);
    }

    #[test]
    fn test_quote_preserves_codes_verbatim() {
        let quote = RateQuote::now("usd", "EUR", 1.0);

        assert_eq!(quote.from, "usd");
        assert_eq!(quote.to, "EUR");
    }

    proptest! {
        #[test]
        fn conversion_is_plain_multiplication(
            amount in -1.0e9f64..1.0e9,
            rate in 1.0e-6f64..1.0e6,
        ) {
            let quote = RateQuote::now("USD", "EUR", rate);
            let conversion = Conversion::price(&quote, amount);

            prop_assert_eq!(conversion.converted, amount * rate);
            prop_assert_eq!(conversion.rate, rate);
            prop_assert_eq!(conversion.amount, amount);
        }
    }
}
