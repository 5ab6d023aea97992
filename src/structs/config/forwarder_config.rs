use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ForwarderConfig {
    /// No timeout is applied when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}
