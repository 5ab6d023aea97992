use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::config::constants::API_KEY_HEADER;
use crate::errors::{InsightConnectError, InsightConnectResult};
use crate::structs::config::forwarder_config::ForwarderConfig;
use crate::structs::transport_response::TransportResponse;
use crate::traits::alert_transport::AlertTransport;

#[derive(Clone)]
pub struct InsightConnectClient {
    client: Client,
}

impl InsightConnectClient {
    pub fn new(config: &ForwarderConfig) -> InsightConnectResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| InsightConnectError::transport_error("build HTTP client", None, &e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl AlertTransport for InsightConnectClient {
    async fn post_event(&self, url: &str, api_key: &str, body: &Value) -> InsightConnectResult<TransportResponse> {
        log::debug!("📤 POST {}", url);

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| InsightConnectError::transport_error("send alert", Some(url), &e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Ok(TransportResponse { status, body: text })
    }
}
