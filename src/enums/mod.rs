pub mod commands;
pub mod trigger_url_kind;
