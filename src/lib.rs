//! Splunk modular alert action that forwards alerts to Rapid7 InsightConnect
//! workflows, and a Splunk AppInspect submitter for the packaged app.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
