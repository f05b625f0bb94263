//! FxRelay Server
//!
//! gRPC surface and process wiring for the FxRelay currency rate service.

pub mod config;
pub mod grpc;

pub use config::ServerConfig;
pub use grpc::CurrencyApi;
