use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FAILURE_RESULT: &str = "failure";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SubmissionReport {
    pub summary: ReportSummary,

    #[serde(default)]
    pub reports: Vec<AppReport>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub failure: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_check: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct AppReport {
    #[serde(default)]
    pub groups: Vec<ReportGroup>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ReportGroup {
    #[serde(default)]
    pub checks: Vec<ReportCheck>,
}

/// A single check; everything besides `result` is kept for logging.
/// Checks that were not run may carry a null or missing `result`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ReportCheck {
    #[serde(default)]
    pub result: Option<String>,

    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ReportCheck {
    pub fn is_failure(&self) -> bool {
        self.result.as_deref() == Some(FAILURE_RESULT)
    }
}

impl SubmissionReport {
    pub fn submission_failures(&self) -> Vec<&ReportCheck> {
        self.reports
            .iter()
            .flat_map(|report| report.groups.iter())
            .flat_map(|group| group.checks.iter())
            .filter(|check| check.is_failure())
            .collect()
    }
}
