use serde_json::{Map, Value};
use crate::config::constants::{API_KEY_KEYS, TRIGGER_URL_KEYS};
use crate::errors::{InsightConnectError, InsightConnectResult};

/// Parameters of a single alert invocation. Blank values count as missing;
/// anything else is kept exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertConfig {
    pub trigger_url: Option<String>,
    pub api_key: Option<String>,
}

impl AlertConfig {
    pub fn new(trigger_url: &str, api_key: &str) -> Self {
        Self {
            trigger_url: non_empty(trigger_url),
            api_key: non_empty(api_key),
        }
    }

    pub fn from_configuration(configuration: &Map<String, Value>) -> InsightConnectResult<Self> {
        Ok(Self {
            trigger_url: lookup_string(configuration, TRIGGER_URL_KEYS)?,
            api_key: lookup_string(configuration, API_KEY_KEYS)?,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn lookup_string(configuration: &Map<String, Value>, keys: &[&str]) -> InsightConnectResult<Option<String>> {
    for key in keys {
        match configuration.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) => {
                if let Some(value) = non_empty(s) {
                    return Ok(Some(value));
                }
            }
            Some(_) => return Err(InsightConnectError::incompatible_payload(key, "a string")),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn configuration(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn padded_values_are_kept_verbatim() {
        let config = AlertConfig::from_configuration(&configuration(json!({
            "trigger_url": " https://us.api.insight.rapid7.com/connect/v1/workflows/abc/events/execute",
            "x-api-key": "  K  "
        })))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("  K  "));
        assert_eq!(
            config.trigger_url.as_deref(),
            Some(" https://us.api.insight.rapid7.com/connect/v1/workflows/abc/events/execute")
        );
        assert_eq!(AlertConfig::new(" u ", "\tK\n").api_key.as_deref(), Some("\tK\n"));
    }

    #[test]
    fn blank_values_fall_through_to_the_next_alias() {
        let config = AlertConfig::from_configuration(&configuration(json!({
            "x-api-key": "   ",
            "api_key": "K"
        })))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("K"));
        assert_eq!(config.trigger_url, None);
    }

    #[test]
    fn non_string_values_are_incompatible() {
        let err = AlertConfig::from_configuration(&configuration(json!({"x-api-key": 42}))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
