use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AppInspectConfig {
    #[serde(default = "ConfigHelper::default_login_url")]
    pub login_url: String,

    /// Base of the `validate`, `validate/status` and `report` endpoints.
    #[serde(default = "ConfigHelper::default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "ConfigHelper::default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "ConfigHelper::default_package_path")]
    pub package_path: String,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppInspectConfig {
    fn default() -> Self {
        Self {
            login_url: ConfigHelper::default_login_url(),
            api_base_url: ConfigHelper::default_api_base_url(),
            poll_interval_secs: ConfigHelper::default_poll_interval_secs(),
            package_path: ConfigHelper::default_package_path(),
            request_timeout_secs: None,
        }
    }
}
