//! FxRelay Common Types
//!
//! Shared types used across the FxRelay service: rate quotes, conversion
//! results, and the currency directory.

pub mod rates;

pub use rates::*;
