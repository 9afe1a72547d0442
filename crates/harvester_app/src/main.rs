mod cli;
mod logging;
mod run;

use std::process::ExitCode;

use clap::Parser;
use engine_logging::engine_error;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.log_destination(), cli.log_level());

    match run::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
