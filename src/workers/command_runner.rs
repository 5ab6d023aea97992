use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::AsyncReadExt;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::sleep_duration_secs;
use crate::enums::commands::Commands;
use crate::errors::{InsightConnectError, InsightConnectResult};
use crate::helpers::trigger_url::validate_trigger_url;
use crate::services::alert_forwarder::AlertForwarder;
use crate::services::appinspect_client::AppInspector;
use crate::services::insightconnect_client::InsightConnectClient;
use crate::structs::alert_payload::AlertPayload;
use crate::structs::config::config::Config;
use crate::traits::alert_transport::AlertTransport;

pub struct CommandRunner {
    config: Config,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> InsightConnectResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Alert { .. } => self.alert_command().await,
            Commands::Appinspect { username, password, cloud, package } => {
                self.appinspect_command(&username, &password, cloud, package).await
            }
            Commands::ValidateUrl { url } => Self::validate_url_command(&url),
            Commands::Init => Self::init_command(&ConfigManager::config_path()),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn alert_command(&self) -> InsightConnectResult<()> {
        log::info!("🔔 Alert action send_to_insightconnect started.");

        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .map_err(|e| InsightConnectError::file_error("<stdin>", "read alert payload", &e.to_string()))?;

        self.send_alert_payload(&raw).await
    }

    /// Uses only the `[forwarder]` section of the config.
    pub async fn send_alert_payload(&self, raw: &str) -> InsightConnectResult<()> {
        let transport = InsightConnectClient::new(&self.config.forwarder)?;
        Self::forward_alert(transport, raw).await
    }

    /// Parses one raw alert payload and sends it through `transport`.
    pub async fn forward_alert<T: AlertTransport>(transport: T, raw: &str) -> InsightConnectResult<()> {
        let payload = AlertPayload::from_json(raw)?;
        AlertForwarder::new(transport, payload).run().await
    }

    async fn appinspect_command(&self, username: &str, password: &str, cloud: bool, package: Option<String>) -> InsightConnectResult<()> {
        ConfigManager::validate_config(&self.config)?;

        let package = package.unwrap_or_else(|| self.config.appinspect.package_path.clone());
        let mut inspector = AppInspector::new(username, password, cloud, &self.config.appinspect);
        let interval = sleep_duration_secs(self.config.appinspect.poll_interval_secs);

        Self::run_submission(&mut inspector, &PathBuf::from(package), interval).await
    }

    /// Authenticate, submit, poll, then judge the report.
    pub async fn run_submission(inspector: &mut AppInspector, package: &Path, interval: std::time::Duration) -> InsightConnectResult<()> {
        inspector.authenticate().await?;
        let request_id = inspector.submit_file(package).await?;

        inspector.wait_for_report(&request_id, interval).await?;

        let report = inspector.get_submission_report(&request_id).await?;
        if AppInspector::is_submission_good(&report) {
            log::info!("🎉 Splunk AppInspect PASSED!");
            Ok(())
        } else {
            Err(InsightConnectError::SubmissionFailed {
                failures: report.summary.failure,
            })
        }
    }

    fn validate_url_command(url: &str) -> InsightConnectResult<()> {
        let kind = validate_trigger_url(url)?;
        log::info!("✅ Valid trigger URL ({})", kind);
        Ok(())
    }

    fn init_command(path: &Path) -> InsightConnectResult<()> {
        log::info!("🚀 Initializing insightconnect-alert configuration...");
        ConfigManager::create_sample_config(path)?;
        log::info!("📝 Edit the configuration file to point at different AppInspect endpoints or package.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::alert_transport::MockAlertTransport;
    use crate::structs::transport_response::TransportResponse;

    #[tokio::test]
    async fn malformed_payload_never_reaches_transport() {
        let mut transport = MockAlertTransport::new();
        transport.expect_post_event().never();

        let err = CommandRunner::forward_alert(transport, "not json").await.unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[tokio::test]
    async fn valid_payload_is_forwarded_once() {
        let mut transport = MockAlertTransport::new();
        transport
            .expect_post_event()
            .times(1)
            .returning(|_, _, _| Ok(TransportResponse::new(200, "")));

        let raw = r#"{"configuration":{"trigger_url":"https://us.api.insight.rapid7.com/connect/v1/workflows/abc-123/events/execute","x-api-key":"K"},"field":"v"}"#;
        CommandRunner::forward_alert(transport, raw).await.unwrap();
    }

    fn config_with_zero_poll_interval() -> Config {
        let mut config = Config::default();
        config.appinspect.poll_interval_secs = 0;
        config
    }

    #[tokio::test]
    async fn alert_flow_ignores_invalid_appinspect_section() {
        let runner = CommandRunner::new(config_with_zero_poll_interval());

        // Fails on the trigger URL, not on the unrelated config section.
        let raw = r#"{"configuration":{"trigger_url":"https://example.com/hook","x-api-key":"K"}}"#;
        let err = runner.send_alert_payload(raw).await.unwrap_err();
        assert!(matches!(err, InsightConnectError::Validation { .. }), "{err}");
    }

    #[tokio::test]
    async fn appinspect_command_rejects_invalid_config_before_any_request() {
        let mut runner = CommandRunner::new(config_with_zero_poll_interval());
        let err = runner
            .run_command(Commands::Appinspect {
                username: "user".to_string(),
                password: "pass".to_string(),
                cloud: false,
                package: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InsightConnectError::Configuration { .. }), "{err}");
        assert!(err.to_string().contains("poll_interval_secs"));
    }

    #[tokio::test]
    async fn validate_url_command_reports_invalid_urls() {
        let mut runner = CommandRunner::new(Config::default());
        let err = runner
            .run_command(Commands::ValidateUrl { url: "https://example.com".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, InsightConnectError::Validation { .. }));
    }

    #[test]
    fn init_command_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        CommandRunner::init_command(&path).unwrap();
        assert!(path.exists());
    }
}
