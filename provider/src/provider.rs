//! Rate provider trait and test double.

use async_trait::async_trait;
use fxrelay_common::Directory;

use crate::error::OriginResult;

#[cfg(any(test, feature = "test-utils"))]
use std::sync::atomic::{AtomicUsize, Ordering};

/// The external authoritative source of exchange rates and currency names.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Fetch how many units of `to` one unit of `from` buys.
    async fn fetch_rate(&self, from: &str, to: &str) -> OriginResult<f64>;

    /// Fetch the full currency code to display name mapping in one call.
    async fn fetch_currencies(&self) -> OriginResult<Directory>;
}

/// Mock rate provider for testing.
///
/// Serves fixture data and counts fetches so tests can assert how often
/// the origin was reached.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateProvider {
    name: String,
    rates: dashmap::DashMap<String, f64>,
    currencies: dashmap::DashMap<String, String>,
    rate_calls: AtomicUsize,
    currency_calls: AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateProvider {
    /// Create a new mock provider.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rates: dashmap::DashMap::new(),
            currencies: dashmap::DashMap::new(),
            rate_calls: AtomicUsize::new(0),
            currency_calls: AtomicUsize::new(0),
        }
    }

    /// Set the rate returned for an ordered pair.
    pub fn set_rate(&self, from: &str, to: &str, rate: f64) {
        self.rates.insert(format!("{from}:{to}"), rate);
    }

    /// Add entries to the currency directory fixture.
    pub fn set_currencies(&self, currencies: Directory) {
        for (code, label) in currencies {
            self.currencies.insert(code, label);
        }
    }

    /// Number of rate fetches served so far.
    pub fn rate_calls(&self) -> usize {
        self.rate_calls.load(Ordering::SeqCst)
    }

    /// Number of directory fetches served so far.
    pub fn currency_calls(&self) -> usize {
        self.currency_calls.load(Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateProvider for MockRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> OriginResult<f64> {
        self.rate_calls.fetch_add(1, Ordering::SeqCst);
        self.rates
            .get(&format!("{from}:{to}"))
            .map(|rate| *rate)
            .ok_or_else(|| {
                crate::error::OriginError::Malformed(format!("no rate fixture for {from}:{to}"))
            })
    }

    async fn fetch_currencies(&self) -> OriginResult<Directory> {
        self.currency_calls.fetch_add(1, Ordering::SeqCst);
        if self.currencies.is_empty() {
            return Err(crate::error::OriginError::Malformed(
                "no currency fixture".to_string(),
            ));
        }
        Ok(self
            .currencies
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_serves_fixture_rate() {
        let provider = MockRateProvider::new("test");
        provider.set_rate("USD", "EUR", 1.08);

        let rate = provider.fetch_rate("USD", "EUR").await.unwrap();

        assert_eq!(rate, 1.08);
        assert_eq!(provider.rate_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_fails_without_fixture() {
        let provider = MockRateProvider::new("test");

        let result = provider.fetch_rate("USD", "EUR").await;

        assert!(result.is_err());
        assert_eq!(provider.rate_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_counts_directory_fetches() {
        let provider = MockRateProvider::new("test");
        provider.set_currencies(Directory::from([(
            "USD".to_string(),
            "US Dollar".to_string(),
        )]));

        let currencies = provider.fetch_currencies().await.unwrap();

        assert_eq!(currencies.len(), 1);
        assert_eq!(provider.currency_calls(), 1);
    }
}
