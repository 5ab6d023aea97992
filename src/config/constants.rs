use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_PACKAGE_PATH: &str = "InsightConnect.spl";

pub const APPINSPECT_LOGIN_URL: &str = "https://api.splunk.com/2.0/rest/login/splunk";
pub const APPINSPECT_API_BASE_URL: &str = "https://appinspect.splunk.com/v1/app";
pub const APPINSPECT_CLOUD_TAG: &str = "cloud";
pub const APPINSPECT_PACKAGE_FIELD: &str = "app_package";

pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const API_KEY_MANAGEMENT_URL: &str = "https://insight.rapid7.com/platform#/apiKeyManagement";

pub const CONFIG_PATH_ENV: &str = "INSIGHTCONNECT_ALERT_CONFIG";
pub const CONFIG_DIR_NAME: &str = "insightconnect-alert";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Key of the payload section that carries the alert's own parameters.
pub const CONFIGURATION_KEY: &str = "configuration";
pub const TRIGGER_URL_KEYS: &[&str] = &["trigger_url", "workflow_trigger_url"];
pub const API_KEY_KEYS: &[&str] = &["x-api-key", "api_key", "rapid7_insight_api_key"];

pub const REPORT_PENDING_STATUSES: &[&str] = &["PREPARING", "PROCESSING"];

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
