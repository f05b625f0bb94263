//! gRPC request handlers.
//!
//! Thin mapping between the wire types and [`RateService`]. The only error
//! that crosses this boundary is an origin failure; cache trouble is
//! absorbed below.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tonic::{Request, Response, Status};
use tracing::error;

use fxrelay_proto::currency::v1::currency_service_server::CurrencyService;
use fxrelay_proto::currency::v1::{
    ConvertRequest, ConvertResponse, GetRateRequest, GetRateResponse, ListCurrenciesRequest,
    ListCurrenciesResponse,
};
use fxrelay_provider::OriginError;
use fxrelay_service::RateService;

/// gRPC surface over [`RateService`].
pub struct CurrencyApi {
    service: Arc<RateService>,
}

impl CurrencyApi {
    /// Wrap a rate service.
    pub fn new(service: Arc<RateService>) -> Self {
        Self { service }
    }
}

fn origin_status(error: OriginError) -> Status {
    error!(%error, "origin provider failure");
    Status::unavailable(error.to_string())
}

fn timestamp(at: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: at.timestamp(),
        nanos: at.timestamp_subsec_nanos() as i32,
    }
}

#[tonic::async_trait]
impl CurrencyService for CurrencyApi {
    async fn get_rate(
        &self,
        request: Request<GetRateRequest>,
    ) -> Result<Response<GetRateResponse>, Status> {
        let req = request.into_inner();
        let quote = self
            .service
            .get_rate(&req.from, &req.to)
            .await
            .map_err(origin_status)?;

        Ok(Response::new(GetRateResponse {
            from: quote.from,
            to: quote.to,
            rate: quote.rate,
            timestamp: Some(timestamp(quote.timestamp)),
        }))
    }

    async fn convert(
        &self,
        request: Request<ConvertRequest>,
    ) -> Result<Response<ConvertResponse>, Status> {
        let req = request.into_inner();
        let conversion = self
            .service
            .convert(&req.from, &req.to, req.amount)
            .await
            .map_err(origin_status)?;

        Ok(Response::new(ConvertResponse {
            from: conversion.from,
            to: conversion.to,
            amount: conversion.amount,
            rate: conversion.rate,
            converted: conversion.converted,
        }))
    }

    async fn list_currencies(
        &self,
        _request: Request<ListCurrenciesRequest>,
    ) -> Result<Response<ListCurrenciesResponse>, Status> {
        let currencies = self
            .service
            .list_currencies()
            .await
            .map_err(origin_status)?;

        Ok(Response::new(ListCurrenciesResponse { currencies }))
    }
}
