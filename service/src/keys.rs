//! Cache key composition.
//!
//! Keys are deterministic functions of the operation and its operands.
//! Currency codes are used exactly as supplied: normalization is the
//! caller's responsibility, so `usd` and `USD` address distinct entries.

/// Key addressing the cached rate for an ordered currency pair.
pub fn rate_key(from: &str, to: &str) -> String {
    format!("rate:{from}:{to}")
}

/// Key addressing the cached currency directory.
pub const CURRENCIES_KEY: &str = "currencies:list";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_key_shape() {
        assert_eq!(rate_key("USD", "EUR"), "rate:USD:EUR");
    }

    #[test]
    fn test_rate_key_preserves_case() {
        assert_ne!(rate_key("usd", "EUR"), rate_key("USD", "EUR"));
    }

    #[test]
    fn test_rate_key_is_ordered() {
        assert_ne!(rate_key("USD", "EUR"), rate_key("EUR", "USD"));
    }
}
