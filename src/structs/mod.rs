pub mod alert_config;
pub mod alert_payload;
pub mod cli;
pub mod config;
pub mod submission_report;
pub mod submission_status;
pub mod transport_response;
