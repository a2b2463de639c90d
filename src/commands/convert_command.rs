//! Parcel conversion command
//!
//! Reads raw parcel records, reprojects them and writes a GeoJSON
//! FeatureCollection.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::ParcelKit;
use crate::commands::command_traits::Command;
use crate::commands::{config_from_args, required_input};
use crate::geojson::errors::GeoResult;
use crate::parcel::ConversionConfig;
use crate::utils::io_utils::{read_input, write_output};
use crate::utils::logger::Logger;

/// Command for converting parcel records to GeoJSON
pub struct ConvertCommand<'a> {
    /// Path to the input file, `-` for stdin
    input_file: String,
    /// Path to the output file; stdout when absent
    output_file: Option<String>,
    /// Resolved conversion settings
    config: ConversionConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        Ok(ConvertCommand {
            input_file: required_input(args)?,
            output_file: args.get_one::<String>("output").cloned(),
            config: config_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Converting {} from {} to {}",
              self.input_file, self.config.source_crs, self.config.target_crs);

        let kit = ParcelKit::new(self.config.clone())?;
        let report = kit.convert_json(&read_input(&self.input_file)?)?;

        if !report.skipped.is_empty() {
            warn!("{} records skipped ({} failed)", report.skipped.len(), report.failure_count());
            let lines: Vec<String> = report.skipped.iter()
                .map(|s| format!("record {}: {}", s.index, s.reason))
                .collect();
            self.logger.log_section("Skipped records:", &lines)?;
        }

        let output = serde_json::to_string_pretty(&report.collection)?;
        write_output(self.output_file.as_deref(), &output)?;

        match &report.bounds {
            Some(bounds) => info!("Converted {} features, bounds {}", report.converted_count(), bounds),
            None => info!("Converted {} features", report.converted_count()),
        }

        Ok(())
    }
}
