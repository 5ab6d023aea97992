use std::path::Path;
use std::time::Duration;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use crate::config::constants::{
    APPINSPECT_CLOUD_TAG, APPINSPECT_PACKAGE_FIELD, DEFAULT_PACKAGE_PATH, REPORT_PENDING_STATUSES,
};
use crate::errors::{InsightConnectError, InsightConnectResult};
use crate::logger::report_logger::ReportLogger;
use crate::structs::config::appinspect_config::AppInspectConfig;
use crate::structs::submission_report::SubmissionReport;
use crate::structs::submission_status::{LoginResponse, SubmissionStatus};

/// Client for the Splunk AppInspect certification API.
///
/// [`AppInspector::authenticate`] must succeed before any other call; it
/// stores a session whose default `Authorization` header carries the bearer
/// token.
pub struct AppInspector {
    username: String,
    password: String,
    use_cloud: bool,
    login_url: String,
    api_base_url: String,
    timeout: Option<Duration>,
    session: Option<Client>,
}

impl AppInspector {
    pub fn new(username: &str, password: &str, use_cloud: bool, config: &AppInspectConfig) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            use_cloud,
            login_url: config.login_url.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
            session: None,
        }
    }

    fn client_builder(&self) -> ClientBuilder {
        let builder = Client::builder();
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    fn session(&self) -> InsightConnectResult<&Client> {
        self.session.as_ref().ok_or_else(|| {
            InsightConnectError::config_error(
                "Not authenticated with Splunk AppInspect",
                None,
                Some("Call authenticate() first"),
            )
        })
    }

    pub async fn authenticate(&mut self) -> InsightConnectResult<()> {
        log::info!("🔐 Authenticating with Splunk AppInspect...");

        let response = self
            .client_builder()
            .build()?
            .get(&self.login_url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| InsightConnectError::transport_error("authenticate", Some(self.login_url.as_str()), &e.to_string()))?;
        let response = ensure_success(response, "authenticate").await?;

        let login: LoginResponse = response.json().await?;
        let token = login
            .data
            .and_then(|data| data.token)
            .ok_or_else(|| InsightConnectError::parse_error("login response", "missing data.token"))?;

        let mut authorization = HeaderValue::from_str(&format!("bearer {}", token))
            .map_err(|e| InsightConnectError::parse_error("login response", &e.to_string()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        self.session = Some(self.client_builder().default_headers(headers).build()?);
        log::info!("✅ Authentication to Splunk AppInspect complete!");
        Ok(())
    }

    /// Uploads the packaged app and returns the AppInspect request id.
    pub async fn submit_file(&self, spl_path: &Path) -> InsightConnectResult<String> {
        let session = self.session()?;
        let uri = format!("{}/validate", self.api_base_url);

        let bytes = tokio::fs::read(spl_path).await.map_err(|e| {
            InsightConnectError::file_error(&spl_path.display().to_string(), "read package", &e.to_string())
        })?;
        let file_name = spl_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PACKAGE_PATH.to_string());

        let mut form = Form::new().part(APPINSPECT_PACKAGE_FIELD, Part::bytes(bytes).file_name(file_name));
        if self.use_cloud {
            log::info!("📦 Submitting {} to Splunk Cloud AppInspect...", spl_path.display());
            form = form.text("included_tags", APPINSPECT_CLOUD_TAG);
        } else {
            log::info!("📦 Submitting {} to Splunk AppInspect...", spl_path.display());
        }

        let response = session
            .post(&uri)
            .multipart(form)
            .send()
            .await
            .map_err(|e| InsightConnectError::transport_error("submit package", Some(uri.as_str()), &e.to_string()))?;
        let response = ensure_success(response, "submit package").await?;

        let status: SubmissionStatus = response.json().await?;
        let request_id = status
            .request_id
            .ok_or_else(|| InsightConnectError::parse_error("submission response", "missing request_id"))?;

        log::info!("✅ Submission to Splunk AppInspect complete! Request id: {}", request_id);
        Ok(request_id)
    }

    pub async fn is_submission_report_ready(&self, request_id: &str) -> InsightConnectResult<bool> {
        let session = self.session()?;
        let uri = format!("{}/validate/status/{}", self.api_base_url, request_id);

        let response = session
            .get(&uri)
            .send()
            .await
            .map_err(|e| InsightConnectError::transport_error("check submission status", Some(uri.as_str()), &e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        let text = response.text().await.unwrap_or_default();
        let pending = serde_json::from_str::<SubmissionStatus>(&text)
            .ok()
            .and_then(|body| body.status)
            .is_some_and(|s| REPORT_PENDING_STATUSES.contains(&s.as_str()));

        if pending {
            Ok(false)
        } else if status == StatusCode::OK {
            Ok(true)
        } else {
            Err(InsightConnectError::remote_failure(
                "check submission status",
                status.as_u16(),
                &format!("An unhandled error occurred while retrieving the submission report status: {}", text),
            ))
        }
    }

    pub async fn get_submission_report(&self, request_id: &str) -> InsightConnectResult<SubmissionReport> {
        let session = self.session()?;
        let uri = format!("{}/report/{}", self.api_base_url, request_id);

        let response = session
            .get(&uri)
            .send()
            .await
            .map_err(|e| InsightConnectError::transport_error("fetch submission report", Some(uri.as_str()), &e.to_string()))?;
        let response = ensure_success(response, "fetch submission report").await?;

        Ok(response.json().await?)
    }

    /// Polls until the report is ready. There is no upper bound on attempts.
    pub async fn wait_for_report(&self, request_id: &str, interval: Duration) -> InsightConnectResult<()> {
        loop {
            log::info!("🔎 Checking submission report status...");
            if self.is_submission_report_ready(request_id).await? {
                log::info!("✅ Submission report is ready!");
                return Ok(());
            }

            log::info!("⏳ Submission report is not ready, sleeping for {} seconds...", interval.as_secs_f64());
            tokio::time::sleep(interval).await;
        }
    }

    pub fn is_submission_good(report: &SubmissionReport) -> bool {
        if report.summary.failure == 0 {
            return true;
        }

        ReportLogger::print_failures(&report.submission_failures());
        false
    }
}

async fn ensure_success(response: Response, operation: &str) -> InsightConnectResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(InsightConnectError::remote_failure(operation, status.as_u16(), &format!("HTTP {}: {}", status, error_text)))
}
