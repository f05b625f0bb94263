//! FxRelay Server Binary
//!
//! gRPC currency rate service backed by a Redis read-through cache and the
//! exchangerate.host origin provider.

use std::sync::Arc;

use tonic::transport::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxrelay_cache::{RedisStore, SharedCacheStore};
use fxrelay_proto::currency::v1::currency_service_server::CurrencyServiceServer;
use fxrelay_provider::ExchangeRateHostClient;
use fxrelay_server::{CurrencyApi, ServerConfig};
use fxrelay_service::RateService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting FxRelay server");

    // Load configuration
    let config = ServerConfig::from_env();
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    let cache: SharedCacheStore = Arc::new(
        RedisStore::connect(&config.redis_url)
            .map_err(|e| anyhow::anyhow!("Cache store setup failed: {}", e))?,
    );
    let provider = Arc::new(ExchangeRateHostClient::new(config.api_key.clone()));
    let service = RateService::new(cache, provider).with_ttl(config.rate_ttl);
    let api = CurrencyApi::new(Arc::new(service));

    let addr = config
        .listen_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;

    info!(
        listen_addr = %addr,
        redis_url = %config.redis_url,
        "FxRelay server running"
    );

    Server::builder()
        .add_service(CurrencyServiceServer::new(api))
        .serve_with_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("FxRelay server shutdown complete");
    Ok(())
}
