//! exchangerate.host API client.

use async_trait::async_trait;
use fxrelay_common::Directory;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{OriginError, OriginResult};
use crate::provider::RateProvider;

const DEFAULT_BASE_URL: &str = "https://api.exchangerate.host";

/// Client for the exchangerate.host HTTP API.
///
/// The API credential is injected at construction; there is no process-wide
/// credential state.
pub struct ExchangeRateHostClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    info: ConvertInfo,
}

#[derive(Debug, Deserialize)]
struct ConvertInfo {
    quote: f64,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    currencies: Directory,
}

impl ExchangeRateHostClient {
    /// Create a client with the given API credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> OriginResult<T> {
        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|e| OriginError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl RateProvider for ExchangeRateHostClient {
    fn name(&self) -> &str {
        "exchangerate.host"
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> OriginResult<f64> {
        let url = format!(
            "{}/convert?access_key={}&from={}&to={}&amount=1",
            self.base_url, self.api_key, from, to
        );

        let data: ConvertResponse = self.get_json(url).await?;
        let quote = data.info.quote;
        if !quote.is_finite() {
            return Err(OriginError::Malformed(format!("non-finite quote {quote}")));
        }

        debug!(from, to, quote, "fetched rate from origin");
        Ok(quote)
    }

    async fn fetch_currencies(&self) -> OriginResult<Directory> {
        let url = format!("{}/list?access_key={}", self.base_url, self.api_key);

        let data: ListResponse = self.get_json(url).await?;

        debug!(
            count = data.currencies.len(),
            "fetched currency directory from origin"
        );
        Ok(data.currencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_convert_response() {
        let body = r#"{
            "success": true,
            "query": {"from": "USD", "to": "EUR", "amount": 1},
            "info": {"timestamp": 1721923200, "quote": 1.08},
            "result": 1.08
        }"#;

        let data: ConvertResponse = serde_json::from_str(body).unwrap();
        assert_eq!(data.info.quote, 1.08);
    }

    #[test]
    fn test_decodes_list_response() {
        let body = r#"{
            "success": true,
            "currencies": {"USD": "US Dollar", "EUR": "Euro"}
        }"#;

        let data: ListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(data.currencies.len(), 2);
        assert_eq!(data.currencies["EUR"], "Euro");
    }

    #[test]
    fn test_rejects_body_without_quote() {
        // Shape the API uses for errors, e.g. a bad access key.
        let body = r#"{"success": false, "error": {"code": 101}}"#;

        assert!(serde_json::from_str::<ConvertResponse>(body).is_err());
    }

    #[test]
    fn test_base_url_override() {
        let client = ExchangeRateHostClient::new("key").with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
