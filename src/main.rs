use std::process;
use log::{error, LevelFilter};

use parcelproj::cli::build_cli;
use parcelproj::commands::{CommandFactory, ParcelprojCommandFactory};
use parcelproj::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    let disabled_logger;
    let logger: &Logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => match Logger::init_global_logger(log_file, level) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .format_timestamp(None)
                .init();
            disabled_logger = Logger::disabled();
            &disabled_logger
        }
    };

    let factory = ParcelprojCommandFactory::new();

    let command_result = factory.create_command(&matches, logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
