//! Server configuration.

use std::time::Duration;

/// Main server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// API credential for the origin rate provider. Required.
    pub api_key: String,
    /// URL of the Redis cache store.
    pub redis_url: String,
    /// gRPC listen address.
    pub listen_addr: String,
    /// How long fetched rates and directories stay cached.
    pub rate_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            redis_url: "redis://127.0.0.1:6379".to_string(),
            listen_addr: "0.0.0.0:50051".to_string(),
            rate_ttl: Duration::from_secs(3600),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("API_KEY") {
            config.api_key = key;
        }

        if let Ok(url) = std::env::var("REDIS_URL") {
            config.redis_url = url;
        }

        if let Ok(addr) = std::env::var("GRPC_LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Ok(secs) = std::env::var("RATE_TTL_SECS") {
            if let Ok(secs) = secs.parse() {
                config.rate_ttl = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("API_KEY is required".to_string());
        }

        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!("invalid listen address: {}", self.listen_addr));
        }

        if self.rate_ttl.is_zero() {
            return Err("rate TTL cannot be zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_requires_api_key() {
        let config = ServerConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_with_key_is_valid() {
        let config = ServerConfig {
            api_key: "secret".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unparseable_listen_addr() {
        let config = ServerConfig {
            api_key: "secret".to_string(),
            listen_addr: "not-an-address".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_ttl() {
        let config = ServerConfig {
            api_key: "secret".to_string(),
            rate_ttl: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
