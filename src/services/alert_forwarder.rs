use serde_json::{Map, Value};
use crate::config::constants::API_KEY_MANAGEMENT_URL;
use crate::errors::{InsightConnectError, InsightConnectResult};
use crate::helpers::trigger_url::validate_trigger_url;
use crate::structs::alert_config::AlertConfig;
use crate::structs::alert_payload::AlertPayload;
use crate::structs::transport_response::TransportResponse;
use crate::traits::alert_transport::AlertTransport;

const SEND_ALERT: &str = "send alert to Rapid7 InsightConnect";

/// Sends one Splunk alert to a Rapid7 InsightConnect workflow.
pub struct AlertForwarder<T: AlertTransport> {
    transport: T,
    config: AlertConfig,
    event: Map<String, Value>,
}

impl<T: AlertTransport> AlertForwarder<T> {
    pub fn new(transport: T, payload: AlertPayload) -> Self {
        Self {
            transport,
            config: payload.config,
            event: payload.event,
        }
    }

    /// Validates both parameters before making the single outbound request.
    pub async fn run(&self) -> InsightConnectResult<()> {
        let trigger_url = self.config.trigger_url.as_deref().ok_or_else(|| {
            InsightConnectError::config_error(
                "Missing Rapid7 InsightConnect Workflow API trigger URL!",
                Some("trigger_url"),
                None,
            )
        })?;

        let kind = validate_trigger_url(trigger_url)?;

        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            let hint = format!("If you need an API key, one can be created at {}", API_KEY_MANAGEMENT_URL);
            InsightConnectError::config_error("Missing Rapid7 Insight platform API key!", Some("api_key"), Some(hint.as_str()))
        })?;

        log::info!("🚀 Sending alert to Rapid7 InsightConnect ({})", kind);
        self.send_alert(trigger_url, api_key).await
    }

    async fn send_alert(&self, url: &str, api_key: &str) -> InsightConnectResult<()> {
        let body = Value::Object(self.event.clone());
        let response = self.transport.post_event(url, api_key, &body).await?;

        interpret_response(&response)?;

        log::info!("✅ Successfully sent alert to Rapid7 InsightConnect!");
        Ok(())
    }
}

/// Maps the documented InsightConnect trigger status codes onto outcomes.
pub fn interpret_response(response: &TransportResponse) -> InsightConnectResult<()> {
    let reason = match response.status {
        200 => return Ok(()),
        400 => "Error: Inactive workflow! Please make sure the workflow is activated in Rapid7 InsightConnect.".to_string(),
        404 => "Error: Workflow version not found! Please make sure the workflow exists and has a published version.".to_string(),
        500 => "Error: An internal error occurred within Rapid7 InsightConnect.".to_string(),
        _ => format!("An error occurred! Response was: {}", response.body),
    };

    Err(InsightConnectError::remote_failure(SEND_ALERT, response.status, &reason))
}
