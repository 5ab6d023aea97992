use async_trait::async_trait;
use serde_json::Value;
use crate::errors::InsightConnectResult;
use crate::structs::transport_response::TransportResponse;

/// Delivers an alert body to a workflow trigger URL.
///
/// Implementations report any HTTP status as a [`TransportResponse`] and only
/// fail when no response was received at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertTransport: Send + Sync {
    async fn post_event(&self, url: &str, api_key: &str, body: &Value) -> InsightConnectResult<TransportResponse>;
}
