use serde_json::{Map, Value};
use crate::config::constants::CONFIGURATION_KEY;
use crate::errors::{InsightConnectError, InsightConnectResult};
use crate::structs::alert_config::AlertConfig;

/// An inbound alert split into its parameters and the event to forward.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertPayload {
    pub config: AlertConfig,
    pub event: Map<String, Value>,
}

impl AlertPayload {
    pub fn from_json(raw: &str) -> InsightConnectResult<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|e| {
            InsightConnectError::parse_error("alert payload", &format!("An invalid JSON string was received: {}", e))
        })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> InsightConnectResult<Self> {
        let Value::Object(mut event) = value else {
            return Err(InsightConnectError::incompatible_payload("payload", "a JSON object"));
        };

        // Removed before forwarding so the API key never leaves in the body.
        let config = match event.remove(CONFIGURATION_KEY) {
            Some(Value::Object(configuration)) => AlertConfig::from_configuration(&configuration)?,
            None | Some(Value::Null) => {
                return Err(InsightConnectError::config_error(
                    "Either 'trigger URL' or 'x-api-key' was missing!",
                    Some(CONFIGURATION_KEY),
                    None,
                ))
            }
            Some(_) => return Err(InsightConnectError::incompatible_payload(CONFIGURATION_KEY, "a JSON object")),
        };

        Ok(Self { config, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://us.api.insight.rapid7.com/connect/v1/workflows/abc-123/events/execute";

    #[test]
    fn configuration_is_stripped_from_event() {
        let raw = json!({
            "configuration": {"trigger_url": URL, "x-api-key": "K"},
            "field": "v"
        })
        .to_string();

        let payload = AlertPayload::from_json(&raw).unwrap();
        assert_eq!(Value::Object(payload.event), json!({"field": "v"}));
        assert_eq!(payload.config, AlertConfig::new(URL, "K"));
    }

    #[test]
    fn host_setting_names_are_accepted() {
        let payload = AlertPayload::from_value(json!({
            "configuration": {"workflow_trigger_url": URL, "rapid7_insight_api_key": "K2"},
            "result": {"host": "web-01"}
        }))
        .unwrap();

        assert_eq!(payload.config.trigger_url.as_deref(), Some(URL));
        assert_eq!(payload.config.api_key.as_deref(), Some("K2"));
        assert_eq!(Value::Object(payload.event), json!({"result": {"host": "web-01"}}));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let payload = AlertPayload::from_value(json!({
            "configuration": {"trigger_url": "  ", "api_key": ""}
        }))
        .unwrap();
        assert_eq!(payload.config, AlertConfig::default());
    }

    #[test]
    fn missing_configuration_is_a_configuration_error() {
        let err = AlertPayload::from_value(json!({"field": "v"})).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn wrong_shapes_are_incompatible_payloads() {
        for value in [
            json!([1, 2, 3]),
            json!({"configuration": "trigger_url=x"}),
            json!({"configuration": {"trigger_url": 42, "api_key": "K"}}),
        ] {
            let err = AlertPayload::from_value(value).unwrap_err();
            assert!(matches!(err, InsightConnectError::IncompatiblePayload { .. }), "{err}");
            assert_eq!(err.exit_code(), 4);
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AlertPayload::from_json("{not json").unwrap_err();
        assert!(matches!(err, InsightConnectError::Parse { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }
}
