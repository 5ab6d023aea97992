pub mod appinspect_config;
pub mod config;
pub mod forwarder_config;
