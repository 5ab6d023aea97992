use clap::{CommandFactory, Parser};
use insightconnect_alert::config::config_manager::ConfigManager;
use insightconnect_alert::errors::{ErrorHandler, InsightConnectResult};
use insightconnect_alert::logger::init_logger;
use insightconnect_alert::structs::cli::Cli;
use insightconnect_alert::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> InsightConnectResult<()> {
    let Some(command) = cli.into_command() else {
        Cli::command().print_help()?;
        std::process::exit(2);
    };

    let config = ConfigManager::load()?;
    CommandRunner::new(config).run_command(command).await
}
