use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightConnectError {
    // Missing or unusable settings
    #[error("Configuration Error: {}", render_with_hint(.message, .field.as_deref(), .suggestion.as_deref()))]
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    // Values that are present but malformed
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    Validation {
        field: String,
        value: String,
        constraint: String,
    },

    // The request never produced a response
    #[error("Network error during {operation}: {reason}{}", render_url(.url.as_deref()))]
    Transport {
        operation: String,
        url: Option<String>,
        reason: String,
    },

    // The remote service answered with a failure status
    #[error("{reason} (Status: {status_code} during {operation})")]
    RemoteFailure {
        operation: String,
        status_code: u16,
        reason: String,
    },

    #[error("Parse error in {content_type}: {reason}")]
    Parse {
        content_type: String,
        reason: String,
    },

    // The host handed us a payload of the wrong shape
    #[error("Incompatible payload: '{field}' should be {expected}. Please verify that a compatible version of the alert action is installed")]
    IncompatiblePayload {
        field: String,
        expected: String,
    },

    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperation {
        file_path: String,
        operation: String,
        reason: String,
    },

    #[error("Splunk AppInspect FAILED with {failures} failing check(s)")]
    SubmissionFailed {
        failures: u64,
    },
}

fn render_with_hint(message: &str, field: Option<&str>, suggestion: Option<&str>) -> String {
    let mut msg = message.to_string();
    if let Some(field) = field {
        msg.push_str(&format!(" (field: {})", field));
    }
    if let Some(suggestion) = suggestion {
        msg.push_str(&format!(". {}", suggestion));
    }
    msg
}

fn render_url(url: Option<&str>) -> String {
    url.map(|u| format!(" (URL: {})", u)).unwrap_or_default()
}

impl InsightConnectError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn transport_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::Transport {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            reason: reason.to_string(),
        }
    }

    pub fn remote_failure(operation: &str, status_code: u16, reason: &str) -> Self {
        Self::RemoteFailure {
            operation: operation.to_string(),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::Parse {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn incompatible_payload(field: &str, expected: &str) -> Self {
        Self::IncompatiblePayload {
            field: field.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Transport failures and server-side errors may succeed on a later run;
    /// everything else needs the configuration or the payload fixed first.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::RemoteFailure { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }

    /// Process exit code reported back to the alert host.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration { .. } => 3,
            Self::IncompatiblePayload { .. } => 4,
            Self::SubmissionFailed { .. } => 1,
            _ => 5,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "CONFIGURATION",
            Self::Validation { .. } => "VALIDATION",
            Self::Transport { .. } => "TRANSPORT",
            Self::RemoteFailure { .. } => "REMOTE",
            Self::Parse { .. } => "PARSE",
            Self::IncompatiblePayload { .. } => "PAYLOAD",
            Self::FileOperation { .. } => "FILE",
            Self::SubmissionFailed { .. } => "APPINSPECT",
        }
    }
}

/// Result type alias for alert and AppInspect operations
pub type InsightConnectResult<T> = Result<T, InsightConnectError>;

/// Error handler for consistent error processing at the process boundary
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &InsightConnectError) {
        log::error!("❌ [{}] {}", error.kind(), error);

        if error.is_recoverable() {
            log::info!("🔄 This error is transient, the alert can be retried");
        }
    }
}

impl From<std::io::Error> for InsightConnectError {
    fn from(error: std::io::Error) -> Self {
        InsightConnectError::FileOperation {
            file_path: String::new(),
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for InsightConnectError {
    fn from(error: serde_json::Error) -> Self {
        InsightConnectError::Parse {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for InsightConnectError {
    fn from(error: toml::de::Error) -> Self {
        InsightConnectError::Parse {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for InsightConnectError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(|u| u.to_string());
        match error.status() {
            Some(status) => InsightConnectError::RemoteFailure {
                operation: "HTTP request".to_string(),
                status_code: status.as_u16(),
                reason: error.to_string(),
            },
            None if error.is_decode() => InsightConnectError::Parse {
                content_type: "HTTP response body".to_string(),
                reason: error.to_string(),
            },
            None => InsightConnectError::Transport {
                operation: "HTTP request".to_string(),
                url,
                reason: error.to_string(),
            },
        }
    }
}
