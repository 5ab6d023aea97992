use once_cell::sync::Lazy;
use regex::Regex;
use crate::enums::trigger_url_kind::TriggerUrlKind;
use crate::errors::{InsightConnectError, InsightConnectResult};

const HOST_PREFIX: &str = r"^https://[A-Za-z0-9]{2}\.api\.insight\.rapid7\.com/connect/v\d";

/// Optional trailing slash, then an optional query string or fragment.
const PATH_END: &str = r"/?(?:[?#].*)?$";

static EVENTS_EXECUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{HOST_PREFIX}/workflows/[A-Za-z0-9\-]+/events/execute{PATH_END}"))
        .expect("events execute pattern compiles")
});

static ASYNC_EXECUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{HOST_PREFIX}/execute/async/workflows/[A-Za-z0-9\-]+{PATH_END}"))
        .expect("async execute pattern compiles")
});

impl TriggerUrlKind {
    pub fn classify(trigger_url: &str) -> Option<Self> {
        if EVENTS_EXECUTE_RE.is_match(trigger_url) {
            Some(Self::EventsExecute)
        } else if ASYNC_EXECUTE_RE.is_match(trigger_url) {
            Some(Self::AsyncExecute)
        } else {
            None
        }
    }
}

pub fn is_workflow_trigger_url_valid(trigger_url: &str) -> bool {
    TriggerUrlKind::classify(trigger_url).is_some()
}

pub fn validate_trigger_url(trigger_url: &str) -> InsightConnectResult<TriggerUrlKind> {
    TriggerUrlKind::classify(trigger_url).ok_or_else(|| {
        InsightConnectError::validation_error(
            "trigger_url",
            trigger_url,
            "https://<region>.api.insight.rapid7.com/connect/v<N>/workflows/<id>/events/execute \
             or .../connect/v<N>/execute/async/workflows/<id>",
        )
    })
}
