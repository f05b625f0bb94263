//! FxRelay Origin Providers
//!
//! Clients for the external authoritative source of exchange rates and
//! currency names, behind the [`RateProvider`] trait so the origin can be
//! swapped or stubbed in tests.

pub mod error;
pub mod exchangeratehost;
pub mod provider;

pub use error::{OriginError, OriginResult};
pub use exchangeratehost::ExchangeRateHostClient;
pub use provider::RateProvider;

#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockRateProvider;
