pub mod config_helper;
pub mod trigger_url;
