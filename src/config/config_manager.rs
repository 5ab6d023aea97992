use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::errors::{InsightConnectError, InsightConnectResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    pub fn load() -> InsightConnectResult<Config> {
        Self::load_from(&Self::config_path())
    }

    /// Missing files fall back to the built-in defaults. Section-specific
    /// checks run in the command that uses the section.
    pub fn load_from(path: &Path) -> InsightConnectResult<Config> {
        if path.as_os_str().is_empty() || !path.exists() {
            log::debug!("📋 No config file found, using defaults");
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| InsightConnectError::file_error(&path.display().to_string(), "read config", &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: &Path) -> InsightConnectResult<()> {
        let sample_config = r#"# insightconnect-alert configuration

[forwarder]
# Seconds before the webhook POST is abandoned. Omit for no timeout.
# request_timeout_secs = 30

[appinspect]
login_url = "https://api.splunk.com/2.0/rest/login/splunk"
api_base_url = "https://appinspect.splunk.com/v1/app"

# How often to check whether the submission report is ready
poll_interval_secs = 5

# Packaged app submitted by the `appinspect` command
package_path = "InsightConnect.spl"
"#;
        if path.exists() {
            return Err(InsightConnectError::config_error(
                "Configuration file already exists",
                Some(path.display().to_string().as_str()),
                Some("Remove it first or edit it in place"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| InsightConnectError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }
        fs::write(path, sample_config)
            .map_err(|e| InsightConnectError::file_error(&path.display().to_string(), "write config", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    /// Checks the `[appinspect]` section. The alert flow never calls this.
    pub fn validate_config(config: &Config) -> InsightConnectResult<()> {
        let mut errors = Vec::new();

        if config.appinspect.login_url.trim().is_empty() {
            errors.push("appinspect.login_url must not be empty");
        }
        if config.appinspect.api_base_url.trim().is_empty() {
            errors.push("appinspect.api_base_url must not be empty");
        }
        if config.appinspect.poll_interval_secs == 0 {
            errors.push("appinspect.poll_interval_secs must be greater than zero");
        }
        if config.appinspect.package_path.trim().is_empty() {
            errors.push("appinspect.package_path must not be empty");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InsightConnectError::config_error(&errors.join("; "), None, Some("Fix the configuration file")))
        }
    }
}
