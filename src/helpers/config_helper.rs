use crate::config::constants::{
    APPINSPECT_API_BASE_URL, APPINSPECT_LOGIN_URL, DEFAULT_PACKAGE_PATH, DEFAULT_POLL_INTERVAL_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_login_url() -> String {
        APPINSPECT_LOGIN_URL.to_string()
    }

    pub fn default_api_base_url() -> String {
        APPINSPECT_API_BASE_URL.to_string()
    }

    pub fn default_poll_interval_secs() -> u64 {
        DEFAULT_POLL_INTERVAL_SECS
    }

    pub fn default_package_path() -> String {
        DEFAULT_PACKAGE_PATH.to_string()
    }
}
