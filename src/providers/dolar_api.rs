use crate::core::quote::{Quote, QuoteProvider, QuoteSource};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

const OFFICIAL_QUOTE_PATH: &str = "/v1/dolares/oficial";

#[derive(Debug, Deserialize)]
struct DolarApiResponse {
    venta: Option<f64>,
    nombre: Option<String>,
    #[serde(rename = "fechaActualizacion")]
    updated_at: Option<String>,
}

/// Official USD quote from dolarapi.com
pub struct DolarApiProvider {
    base_url: String,
    timeout: Duration,
}

impl DolarApiProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        DolarApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl QuoteProvider for DolarApiProvider {
    #[instrument(name = "DolarApiQuoteFetch", skip(self))]
    async fn fetch_quote(&self) -> Result<Quote> {
        let url = format!("{}{}", self.base_url, OFFICIAL_QUOTE_PATH);
        debug!("Requesting quote from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("cambio/0.1")
            .timeout(self.timeout)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} URL: {}", response.status(), url));
        }

        let text = response.text().await?;
        let data: DolarApiResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON quote response: {}", e))?;
        debug!(response = ?data, "Received quote response");

        let sell_rate = data
            .venta
            .ok_or_else(|| anyhow!("Quote response has no sell rate"))?;
        if !sell_rate.is_finite() || sell_rate <= 0.0 {
            return Err(anyhow!("Quote response has invalid sell rate: {}", sell_rate));
        }
        if let Some(updated_at) = &data.updated_at {
            debug!("Quote last updated at {}", updated_at);
        }

        Ok(Quote {
            sell_rate,
            source: QuoteSource::Remote(data.nombre.unwrap_or_else(|| "DolarApi".to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(OFFICIAL_QUOTE_PATH))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        mock_server
    }

    fn provider(mock_server: &MockServer) -> DolarApiProvider {
        DolarApiProvider::new(&mock_server.uri(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_successful_quote_fetch() {
        let mock_response = r#"{
            "moneda": "USD",
            "casa": "oficial",
            "nombre": "Oficial",
            "compra": 1005.5,
            "venta": 1045.5,
            "fechaActualizacion": "2025-07-09T14:00:00.000Z"
        }"#;
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;

        let quote = provider(&mock_server).fetch_quote().await.unwrap();
        assert_eq!(quote.sell_rate, 1045.5);
        assert_eq!(quote.source, QuoteSource::Remote("Oficial".to_string()));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(r#"{"venta": 990}"#))
                .await;

        let provider =
            DolarApiProvider::new(&format!("{}/", mock_server.uri()), Duration::from_secs(5));
        let quote = provider.fetch_quote().await.unwrap();
        assert_eq!(quote.sell_rate, 990.0);
        assert_eq!(quote.source, QuoteSource::Remote("DolarApi".to_string()));
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = create_mock_server(ResponseTemplate::new(500)).await;

        let result = provider(&mock_server).fetch_quote().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("HTTP error: 500 Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_missing_sell_rate() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200).set_body_string(r#"{"compra": 1005.5}"#),
        )
        .await;

        let result = provider(&mock_server).fetch_quote().await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Quote response has no sell rate"
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string("<html></html>")).await;

        let result = provider(&mock_server).fetch_quote().await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON quote response")
        );
    }

    #[tokio::test]
    async fn test_non_positive_sell_rate() {
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(r#"{"venta": 0}"#))
                .await;

        let result = provider(&mock_server).fetch_quote().await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid sell rate")
        );
    }

    #[tokio::test]
    async fn test_request_times_out() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"venta": 990}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .await;

        let provider = DolarApiProvider::new(&mock_server.uri(), Duration::from_millis(50));
        let result = provider.fetch_quote().await;
        assert!(result.unwrap_err().to_string().starts_with("Request error"));
    }
}
