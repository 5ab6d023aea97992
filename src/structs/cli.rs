use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "insightconnect-alert")]
#[clap(about = "Forward Splunk alerts to Rapid7 InsightConnect workflows", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Bare `--execute`, as passed by the Splunk alert action host
    #[clap(long, hide = true)]
    pub execute: bool,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// A bare `--execute` with no subcommand runs the alert forwarder.
    pub fn into_command(self) -> Option<Commands> {
        match self.command {
            Some(command) => Some(command),
            None if self.execute => Some(Commands::Alert { execute: true }),
            None => None,
        }
    }
}
