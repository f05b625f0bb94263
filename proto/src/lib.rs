//! FxRelay gRPC API
//!
//! Generated protobuf and tonic bindings for the `currency.v1` service.

/// Messages and service stubs for `currency.v1`.
pub mod currency {
    pub mod v1 {
        tonic::include_proto!("currency.v1");
    }
}
