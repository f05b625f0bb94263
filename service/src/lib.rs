//! FxRelay Rate Coordination
//!
//! The read-through caching layer between the gRPC surface and the origin
//! rate provider. Per request it decides whether to serve from cache or
//! origin, how cached values are keyed and encoded, how long they live,
//! and how origin failures and cache failures are handled relative to
//! each other.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use fxrelay_cache::MemoryStore;
//! use fxrelay_provider::ExchangeRateHostClient;
//! use fxrelay_service::RateService;
//!
//! let service = RateService::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(ExchangeRateHostClient::new("key")),
//! );
//!
//! let quote = service.get_rate("USD", "EUR").await?;
//! let conversion = service.convert("USD", "EUR", 100.0).await?;
//! ```

pub mod keys;
pub mod service;

pub use service::{RateService, DEFAULT_TTL};
