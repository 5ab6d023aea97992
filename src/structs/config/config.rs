use serde::{Deserialize, Serialize};
use crate::structs::config::appinspect_config::AppInspectConfig;
use crate::structs::config::forwarder_config::ForwarderConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub forwarder: ForwarderConfig,

    #[serde(default)]
    pub appinspect: AppInspectConfig,
}
