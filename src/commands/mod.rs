//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod inspect_command;
pub mod project_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use inspect_command::InspectCommand;
pub use project_command::ProjectCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::geojson::errors::{GeoError, GeoResult};
use crate::parcel::ConversionConfig;

/// Factory for creating command instances based on CLI arguments
pub struct ParcelprojCommandFactory;

impl ParcelprojCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ParcelprojCommandFactory
    }
}

impl Default for ParcelprojCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ParcelprojCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>> {
        if args.get_one::<String>("coordinate").is_some() {
            Ok(Box::new(ProjectCommand::new(args)?))
        } else if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(args, logger)?))
        } else {
            // Default to conversion
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        }
    }
}

/// Input path argument, which every file-based command needs
pub(crate) fn required_input(args: &ArgMatches) -> GeoResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| GeoError::GenericError("Missing input file".to_string()))
}

/// Build settings from an optional `--config` file overlaid with CLI flags
pub(crate) fn config_from_args(args: &ArgMatches) -> GeoResult<ConversionConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => ConversionConfig::from_file(path)?,
        None => ConversionConfig::default(),
    };

    if let Some(source) = args.get_one::<String>("source-crs") {
        config.source_crs = source.clone();
    }
    if let Some(target) = args.get_one::<String>("target-crs") {
        config.target_crs = target.clone();
    }
    if args.get_flag("fail-fast") {
        config.policy = crate::parcel::BatchPolicy::Abort;
    }
    if args.get_flag("progress") {
        config.show_progress = true;
    }

    Ok(config)
}
