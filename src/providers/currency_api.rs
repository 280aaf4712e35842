use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::core::currency::{CurrencyNames, RateProvider, RateTable};

/// Client for the jsDelivr-hosted currency-api dataset.
///
/// Rates for a base live at `{base_url}/currencies/{base}.json` as
/// `{"date": "...", "{base}": {"{code}": rate}}`, and the list of supported
/// currencies at `{base_url}/currencies.json` as `{"{code}": "name"}`.
/// Every fetch is a single attempt.
pub struct CurrencyApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl CurrencyApiProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fxconv/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(CurrencyApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch_object(&self, url: &str) -> Result<serde_json::Map<String, Value>> {
        debug!("Requesting {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} URL: {}", response.status(), url));
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text from {url}"))?;

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(anyhow!("Expected a JSON object from {}", url)),
            Err(e) => Err(anyhow!("Failed to parse JSON response from {}: {}", url, e)),
        }
    }
}

#[async_trait]
impl RateProvider for CurrencyApiProvider {
    #[instrument(name = "CurrencyApiRates", skip(self), fields(base = %base))]
    async fn fetch_rates(&self, base: &str) -> Result<RateTable> {
        let base = base.to_lowercase();
        let url = format!("{}/currencies/{}.json", self.base_url, base);
        let mut document = self.fetch_object(&url).await?;

        match document.remove(&base) {
            Some(Value::Object(rates)) => Ok(rates),
            _ => {
                debug!("No rate table for base {} in response", base);
                Ok(RateTable::new())
            }
        }
    }

    #[instrument(name = "CurrencyApiNames", skip(self))]
    async fn fetch_currency_names(&self) -> Result<CurrencyNames> {
        let url = format!("{}/currencies.json", self.base_url);
        self.fetch_object(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(request_path: &str, status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rates_fetch() {
        let mock_response = r#"{
            "date": "2026-10-15",
            "usd": { "eur": 0.9123, "inr": 83.12, "gbp": 0.79 }
        }"#;
        let mock_server = create_mock_server("/currencies/usd.json", 200, mock_response).await;

        let provider = CurrencyApiProvider::new(&mock_server.uri()).unwrap();
        let rates = provider.fetch_rates("usd").await.unwrap();

        assert_eq!(rates.len(), 3);
        assert_eq!(rates.get("eur").and_then(Value::as_f64), Some(0.9123));
        assert_eq!(rates.get("inr").and_then(Value::as_f64), Some(83.12));
    }

    #[tokio::test]
    async fn test_rates_lookup_is_lowercased() {
        let mock_response = r#"{"date": "2026-10-15", "usd": { "eur": 0.9 }}"#;
        let mock_server = create_mock_server("/currencies/usd.json", 200, mock_response).await;

        let provider = CurrencyApiProvider::new(&mock_server.uri()).unwrap();
        let rates = provider.fetch_rates("USD").await.unwrap();
        assert_eq!(rates.get("eur").and_then(Value::as_f64), Some(0.9));
    }

    #[tokio::test]
    async fn test_missing_base_table_is_empty() {
        let mock_response = r#"{"date": "2026-10-15"}"#;
        let mock_server = create_mock_server("/currencies/usd.json", 200, mock_response).await;

        let provider = CurrencyApiProvider::new(&mock_server.uri()).unwrap();
        let rates = provider.fetch_rates("usd").await.unwrap();
        assert!(rates.is_empty());
    }

    #[tokio::test]
    async fn test_rates_api_error_response() {
        let mock_server = create_mock_server("/currencies/usd.json", 500, "").await;

        let provider = CurrencyApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch_rates("usd").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("HTTP error: 500 Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_rates_api_malformed_response() {
        let mock_server = create_mock_server("/currencies/usd.json", 200, "not json").await;

        let provider = CurrencyApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch_rates("usd").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response")
        );
    }

    #[tokio::test]
    async fn test_currency_names_keep_upstream_order() {
        let mock_response = r#"{"usd": "US Dollar", "eur": "Euro", "1inch": "1inch Network"}"#;
        let mock_server = create_mock_server("/currencies.json", 200, mock_response).await;

        let provider = CurrencyApiProvider::new(&mock_server.uri()).unwrap();
        let names = provider.fetch_currency_names().await.unwrap();
        let codes: Vec<&str> = names.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["usd", "eur", "1inch"]);
    }

    #[tokio::test]
    async fn test_currency_names_non_object_is_error() {
        let mock_server = create_mock_server("/currencies.json", 200, r#"["usd"]"#).await;

        let provider = CurrencyApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch_currency_names().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Expected a JSON object")
        );
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let mock_server = create_mock_server("/currencies.json", 200, r#"{"usd": "US Dollar"}"#).await;

        let provider = CurrencyApiProvider::new(&format!("{}/", mock_server.uri())).unwrap();
        let names = provider.fetch_currency_names().await.unwrap();
        assert_eq!(names.len(), 1);
    }
}
