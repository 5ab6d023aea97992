use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Read an alert payload from stdin and send it to its InsightConnect workflow
    Alert {
        /// Passed by the Splunk alert host; accepted and ignored
        #[clap(long)]
        execute: bool,
    },
    /// Submit the packaged app to Splunk AppInspect and wait for the verdict
    Appinspect {
        username: String,
        password: String,
        #[clap(long)]
        cloud: bool,
        #[clap(short, long)]
        package: Option<String>,
    },
    /// Check a workflow trigger URL without sending anything
    ValidateUrl {
        url: String,
    },
    /// Write a sample configuration file
    Init,
}
