use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use dispatcher::cli::Args;
use shared_resources::config::ConfigFile;

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.default_log_filter())).init();

    // READ CONFIGURATION
    let mut config = match ConfigFile::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    args.apply(&mut config);
    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Dispatcher started: {} elevators, {} floors",
        config.elevator.num_elevators, config.elevator.num_floors
    );
    match dispatcher::modules::run(config, args.events) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
