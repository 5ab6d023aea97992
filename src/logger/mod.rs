pub mod report_logger;

use env_logger::Env;

/// Logs go to stderr, where the Splunk host collects them into `splunkd.log`.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}
